use bpcore::ac::{
    registry::{
        FilterSet,
        PermissionSet,
    },
    resource::ResourceMeta,
    traits::{
        FilterProvider,
        PermissionProvider,
        Resource,
    },
};
use std::sync::OnceLock;

/// A resource type that registers neither object permissions nor
/// object filters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Opaque(pub i64);

static META: OnceLock<ResourceMeta> = OnceLock::new();

impl Resource for Opaque {
    fn meta() -> &'static ResourceMeta {
        META.get_or_init(|| ResourceMeta::builder("vault", "opaque")
            .permission("seal_opaque", "Can seal")
            .build()
        )
    }
}

impl<A: ?Sized + 'static> PermissionProvider<A> for Opaque {
    fn object_permissions() -> Option<&'static PermissionSet<A, Self>> {
        None
    }
}

impl<A: ?Sized + 'static> FilterProvider<A, Vec<Opaque>> for Opaque {
    fn object_filters() -> Option<&'static FilterSet<A, Vec<Opaque>>> {
        None
    }
}

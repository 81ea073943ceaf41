use enumset::EnumSet;
use std::collections::BTreeSet;
use super::permission::DefaultPermissions;

/// Describes a resource type to the permission machinery.
///
/// The set of available permission codenames is derived once when the
/// descriptor is built, as neither the defaults nor the declared extra
/// permissions for a type change for the lifetime of the process.
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceMeta {
    namespace: String,
    type_name: String,
    default_permissions: DefaultPermissions,
    permissions: Vec<(String, String)>,
    available: BTreeSet<String>,
}

/// Builds a [`ResourceMeta`].
///
/// All default permissions are attached unless replaced through
/// [`Builder::default_permissions`].
#[derive(Clone, Debug)]
pub struct Builder {
    namespace: String,
    type_name: String,
    default_permissions: DefaultPermissions,
    permissions: Vec<(String, String)>,
}

impl Builder {
    pub fn new(
        namespace: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            type_name: type_name.into(),
            default_permissions: EnumSet::all(),
            permissions: Vec::new(),
        }
    }

    pub fn default_permissions(mut self, val: DefaultPermissions) -> Self {
        self.default_permissions = val;
        self
    }

    /// Declare an additional permission codename for the type.
    pub fn permission(
        mut self,
        codename: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.permissions.push((codename.into(), description.into()));
        self
    }

    pub fn build(self) -> ResourceMeta {
        let available = self.default_permissions
            .iter()
            .map(|perm| perm.codename(&self.type_name))
            .chain(self.permissions
                .iter()
                .map(|(codename, _)| codename.clone())
            )
            .collect::<BTreeSet<_>>();
        log::trace!(
            "built resource meta for {}.{} with {} permission(s)",
            self.namespace,
            self.type_name,
            available.len(),
        );
        ResourceMeta {
            namespace: self.namespace,
            type_name: self.type_name,
            default_permissions: self.default_permissions,
            permissions: self.permissions,
            available,
        }
    }
}

mod impls;

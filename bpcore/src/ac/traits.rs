use super::{
    registry::{
        FilterSet,
        PermissionSet,
    },
    resource::ResourceMeta,
};

/// The party a request is made on behalf of.
///
/// Whether the actor is who they say they are, and which general
/// permissions they hold through their roles or groups, is determined
/// elsewhere; this only exposes the outcome of those.
pub trait Actor {
    fn is_authenticated(&self) -> bool;
    fn is_active(&self) -> bool;
    /// Whether the actor holds the qualified permission code without
    /// reference to any specific instance.
    fn has_general_permission(&self, code: &str) -> bool;

    fn has_general_permissions(&self, codes: &[String]) -> bool {
        codes.iter()
            .all(|code| self.has_general_permission(code))
    }
}

/// A type whose instances are subject to permission checks.
pub trait Resource {
    fn meta() -> &'static ResourceMeta;
}

/// Provides the object permission predicates registered for a type.
///
/// A type without any returns `None`, in which case every check falls
/// back to the configured default.
pub trait PermissionProvider<A: ?Sized + 'static>: Resource + 'static {
    fn object_permissions() -> Option<&'static PermissionSet<A, Self>>;
}

/// Provides the object filters registered for a type, used to narrow a
/// collection `C` of its instances.
pub trait FilterProvider<A: ?Sized + 'static, C: 'static>: Resource + 'static {
    fn object_filters() -> Option<&'static FilterSet<A, C>>;
}

/// A collection of resource instances that may be narrowed.
pub trait Collection: Sized {
    type Item;

    /// Discard every instance from the collection.
    fn none(self) -> Self;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn none(mut self) -> Self {
        self.clear();
        self
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

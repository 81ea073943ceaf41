use crate::tester::ObjectPermissionTester;

/// Authorization backend for object permissions.
///
/// This never establishes the identity of an actor, so it must be used
/// alongside some other means of authentication.  It answers whether an
/// actor holds a permission for a specific instance, optionally also
/// accepting a general grant of the same permission in lieu of one
/// from the instance.
///
/// Constructed through [`crate::Builder`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectPermissionBackend {
    tester: ObjectPermissionTester,
    allow_anonymous_user: bool,
    include_general_permissions: bool,
}

mod impls;

/// Evaluates the object permission predicates a resource type has
/// registered for a given instance.
///
/// Codenames for which the type has no predicate, including every
/// codename for a type with no predicates at all, evaluate to the
/// default permission.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObjectPermissionTester {
    default_permission: bool,
}

mod impls;

//! The access policy and action filter for the user endpoints.
//!
//! Both extend the standard view model with the account management
//! actions, each of which is dispatched on an instance.

use bpac::{
    filter::Builder as FilterBuilder,
    policy::Builder as PolicyBuilder,
};
use bpperm::{
    Builder as BackendBuilder,
    ObjectPermissionBackend,
};

/// The backend for users; a general permission stands in for the
/// object permission.
pub fn backend() -> ObjectPermissionBackend {
    BackendBuilder::new()
        .include_general_permissions(true)
        .build()
}

pub fn access_policy() -> PolicyBuilder {
    PolicyBuilder::action_view_model()
        .perms("activate", [])
        .perms("password", [])
        .perms("reset_password", [])
        .perms("groups", [])
        .perms("permissions", [])
        .obj_perms("activate", ["{namespace}.set_user_active"])
        .obj_perms("password", ["{namespace}.set_user_password"])
        .obj_perms("reset_password", ["{namespace}.reset_user_password"])
        .obj_perms("groups", ["{namespace}.change_user_groups"])
        .obj_perms("permissions", ["{namespace}.change_user_permissions"])
        .backend(backend())
}

pub fn action_filter() -> FilterBuilder {
    FilterBuilder::view_model()
        .perms("activate", [])
        .perms("password", [])
        .perms("reset_password", [])
        .perms("groups", [])
        .perms("permissions", [])
}

//! Object permissions and object filters for users.
//!
//! A user may manage much of their own account, while staff may also
//! view and manage the accounts of others.  Granting admin status or
//! group membership is never possible through the object permissions;
//! these require the general permission.

use bpcore::{
    ac::{
        registry::{
            FilterSet,
            PermissionSet,
        },
        traits::{
            FilterProvider,
            PermissionProvider,
        },
    },
    error::PermissionDenied,
};
use std::sync::LazyLock;

use crate::{
    agent::Agent,
    user::User,
};

fn never(_: &Agent, _: &User) -> Result<bool, PermissionDenied> {
    Ok(false)
}

fn is_self(agent: &Agent, user: &User) -> Result<bool, PermissionDenied> {
    Ok(agent.is_user(user))
}

fn is_staff_or_self(agent: &Agent, user: &User) -> Result<bool, PermissionDenied> {
    Ok(agent.is_staff() || agent.is_user(user))
}

// change_user_permissions is not registered, so it resolves to the
// configured default.
static PERMISSIONS: LazyLock<PermissionSet<Agent, User>> = LazyLock::new(|| {
    PermissionSet::new()
        .register("add_user", never)
        .register("change_user", is_self)
        .register("delete_user", is_self)
        .register("view_user", is_staff_or_self)
        .register("view_admin", never)
        .register("set_user_admin", never)
        .register("set_user_active", is_staff_or_self)
        .register("set_user_password", is_self)
        .register("reset_user_password", is_staff_or_self)
        .register("change_user_groups", never)
});

// Inactive users see nothing, as they may not retrieve any user either.
fn staff_all_user_own(agent: &Agent, mut users: Vec<User>) -> Vec<User> {
    match agent {
        Agent::User(user) if user.is_staff() => users,
        Agent::User(user) if user.is_active => {
            users.retain(|other| other.id == user.id);
            users
        }
        _ => {
            users.clear();
            users
        }
    }
}

static FILTERS: LazyLock<FilterSet<Agent, Vec<User>>> = LazyLock::new(|| {
    FilterSet::new()
        .register("view_user", staff_all_user_own)
});

impl PermissionProvider<Agent> for User {
    fn object_permissions() -> Option<&'static PermissionSet<Agent, Self>> {
        Some(&*PERMISSIONS)
    }
}

impl FilterProvider<Agent, Vec<User>> for User {
    fn object_filters() -> Option<&'static FilterSet<Agent, Vec<User>>> {
        Some(&*FILTERS)
    }
}

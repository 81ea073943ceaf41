use bpcore::ac::{
    catalog,
    resource::ResourceMeta,
    traits::{
        Actor,
        Resource,
    },
};
use std::{
    collections::BTreeSet,
    sync::LazyLock,
};

use super::{
    Group,
    User,
};

static META: LazyLock<ResourceMeta> = LazyLock::new(|| {
    ResourceMeta::builder("users", "user")
        .permission("view_user", "Can view user")
        .permission("view_admin", "Can view admin interface")
        .permission("set_user_admin", "Can set user as admin")
        .permission("set_user_active", "Can activate/deactivate user")
        .permission("set_user_password", "Can set user password")
        .permission("reset_user_password", "Can reset user password")
        .permission("change_user_groups", "Can change user groups")
        .permission("change_user_permissions", "Can change user permissions")
        .build()
});

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: BTreeSet::new(),
        }
    }

    pub fn grant(mut self, code: impl Into<String>) -> Self {
        self.permissions.insert(code.into());
        self
    }
}

impl User {
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            name: String::new(),
            email: String::new(),
            is_active: true,
            is_superuser: false,
            permissions: BTreeSet::new(),
            groups: Vec::new(),
        }
    }

    pub fn name(mut self, val: impl Into<String>) -> Self {
        self.name = val.into();
        self
    }

    pub fn email(mut self, val: impl Into<String>) -> Self {
        self.email = val.into();
        self
    }

    pub fn active(mut self, val: bool) -> Self {
        self.is_active = val;
        self
    }

    pub fn superuser(mut self, val: bool) -> Self {
        self.is_superuser = val;
        self
    }

    pub fn grant(mut self, code: impl Into<String>) -> Self {
        self.permissions.insert(code.into());
        self
    }

    pub fn group(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    pub fn short_name(&self) -> &str {
        &self.username
    }

    pub fn full_name(&self) -> &str {
        if self.name.is_empty() {
            &self.username
        } else {
            &self.name
        }
    }

    /// The general permissions granted to the user directly or through
    /// any of their groups.  An inactive user holds none; an active
    /// superuser holds these along with every other permission.
    pub fn general_permissions(&self) -> BTreeSet<String> {
        if !self.is_active {
            return BTreeSet::new();
        }
        self.permissions.iter()
            .chain(self.groups.iter()
                .flat_map(|group| group.permissions.iter())
            )
            .cloned()
            .collect()
    }

    /// An active user that is either a superuser or may view the admin
    /// interface.
    pub fn is_staff(&self) -> bool {
        self.is_active && (
            self.is_superuser ||
            self.has_general_permission(&catalog::qualify(META.namespace(), "view_admin"))
        )
    }
}

impl Actor for User {
    fn is_authenticated(&self) -> bool {
        true
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn has_general_permission(&self, code: &str) -> bool {
        self.is_active && (
            self.is_superuser ||
            self.permissions.contains(code) ||
            self.groups.iter().any(|group| group.permissions.contains(code))
        )
    }
}

impl Resource for User {
    fn meta() -> &'static ResourceMeta {
        &META
    }
}

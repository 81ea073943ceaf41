use std::collections::BTreeSet;
use crate::ac::permission::DefaultPermissions;
use super::{
    Builder,
    ResourceMeta,
};

impl ResourceMeta {
    pub fn builder(
        namespace: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Builder {
        Builder::new(namespace, type_name)
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_ref()
    }

    pub fn type_name(&self) -> &str {
        self.type_name.as_ref()
    }

    pub fn default_permissions(&self) -> DefaultPermissions {
        self.default_permissions
    }

    /// The extra permissions declared for this type, as pairs of
    /// codename and description.
    pub fn declared_permissions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.permissions
            .iter()
            .map(|(codename, description)| (codename.as_str(), description.as_str()))
    }

    /// Bare codenames of every permission valid for this type.
    pub fn available_permissions(&self) -> &BTreeSet<String> {
        &self.available
    }

    pub fn has_codename(&self, codename: &str) -> bool {
        self.available.contains(codename)
    }
}

#[cfg(test)]
mod test {
    use enumset::EnumSet;
    use crate::ac::DefaultPermission;
    use super::ResourceMeta;

    #[test]
    fn defaults_with_declared() {
        let meta = ResourceMeta::builder("users", "user")
            .permission("view_user", "Can view user")
            .permission("set_user_active", "Can activate/deactivate user")
            .build();
        assert_eq!(meta.namespace(), "users");
        assert_eq!(meta.type_name(), "user");
        // the explicitly declared view_user is merged with the default
        assert_eq!(
            meta.available_permissions()
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            [
                "add_user",
                "change_user",
                "delete_user",
                "set_user_active",
                "view_user",
            ],
        );
        assert_eq!(meta.declared_permissions().count(), 2);
        assert!(meta.has_codename("set_user_active"));
        assert!(!meta.has_codename("activate_user"));
    }

    #[test]
    fn restricted_defaults() {
        let meta = ResourceMeta::builder("notes", "note")
            .default_permissions(DefaultPermission::Add | DefaultPermission::View)
            .build();
        assert!(meta.has_codename("add_note"));
        assert!(meta.has_codename("view_note"));
        assert!(!meta.has_codename("change_note"));

        let meta = ResourceMeta::builder("notes", "note")
            .default_permissions(EnumSet::empty())
            .build();
        assert!(meta.available_permissions().is_empty());
    }
}

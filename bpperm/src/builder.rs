#[cfg(feature = "clap")]
use clap::{ArgAction, Parser};

use crate::backend::ObjectPermissionBackend;

/// Builds the [`ObjectPermissionBackend`].
///
/// Methods can be chained in order to set the configuration values;
/// everything is off by default.  With the `clap` feature the values may
/// also be sourced from the command line or the environment.
#[cfg_attr(feature = "clap", derive(Parser))]
#[derive(Clone, Debug, Default)]
pub struct Builder {
    /// Result of an object permission check for which the resource
    /// type has no predicate.
    #[cfg_attr(feature = "clap", clap(
        long,
        value_name = "BP_DEFAULT_PERMISSION",
        env = "BP_DEFAULT_PERMISSION",
        action = ArgAction::Set,
        default_value_t = false,
        default_missing_value = "true",
    ))]
    pub bp_default_permission: bool,
    /// Permit object permissions to be granted to anonymous actors.
    #[cfg_attr(feature = "clap", clap(
        long,
        value_name = "BP_ALLOW_ANONYMOUS_USER",
        env = "BP_ALLOW_ANONYMOUS_USER",
        action = ArgAction::Set,
        default_value_t = false,
        default_missing_value = "true",
    ))]
    pub bp_allow_anonymous_user: bool,
    /// Accept a general permission in place of the object permission.
    #[cfg_attr(feature = "clap", clap(
        long,
        value_name = "BP_INCLUDE_GENERAL_PERMISSIONS",
        env = "BP_INCLUDE_GENERAL_PERMISSIONS",
        action = ArgAction::Set,
        default_value_t = false,
        default_missing_value = "true",
    ))]
    pub bp_include_general_permissions: bool,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_permission(mut self, val: bool) -> Self {
        self.bp_default_permission = val;
        self
    }

    pub fn allow_anonymous_user(mut self, val: bool) -> Self {
        self.bp_allow_anonymous_user = val;
        self
    }

    pub fn include_general_permissions(mut self, val: bool) -> Self {
        self.bp_include_general_permissions = val;
        self
    }

    pub fn build(&self) -> ObjectPermissionBackend {
        log::trace!("building an ObjectPermissionBackend with {self:?}");
        ObjectPermissionBackend::new(
            self.bp_default_permission,
            self.bp_allow_anonymous_user,
            self.bp_include_general_permissions,
        )
    }
}

use bpperm::ObjectPermissionBackend;
use std::collections::BTreeSet;

use crate::{
    error::Error,
    table::PermissionTable,
};
use super::{
    AccessPolicy,
    Lookup,
};

const ADD: &str = "{namespace}.add_{type_name}";
const CHANGE: &str = "{namespace}.change_{type_name}";
const DELETE: &str = "{namespace}.delete_{type_name}";
const VIEW: &str = "{namespace}.view_{type_name}";

/// Builds an [`AccessPolicy`].
///
/// The first malformed template given is reported by [`Builder::build`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    lookup: Lookup,
    perms_map: PermissionTable,
    obj_perms_map: PermissionTable,
    read_only_keys: BTreeSet<String>,
    read_only_key: Option<String>,
    authenticated_users_only: bool,
    backend: ObjectPermissionBackend,
    error: Option<Error>,
}

impl Builder {
    /// A builder with empty tables, which supports no action.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tables keyed by action.  Creation requires the general add
    /// permission, while updating and destroying an instance require
    /// the change and delete object permissions respectively; reading
    /// an instance requires nothing.
    pub fn action_model() -> Self {
        Self::new()
            .perms("list", [])
            .perms("create", [ADD])
            .perms("retrieve", [])
            .perms("update", [])
            .perms("partial_update", [])
            .perms("destroy", [])
            .perms("metadata", [])
            .obj_perms("retrieve", [])
            .obj_perms("update", [CHANGE])
            .obj_perms("partial_update", [CHANGE])
            .obj_perms("destroy", [DELETE])
            .obj_perms("metadata", [])
            .read_only_keys(["retrieve", "metadata"])
            .read_only_key(Some("retrieve"))
    }

    /// As [`Builder::action_model`], but reading an instance requires
    /// the view object permission.
    pub fn action_view_model() -> Self {
        Self::action_model()
            .obj_perms("retrieve", [VIEW])
            .obj_perms("metadata", [VIEW])
    }

    /// Tables keyed by the request method.
    pub fn method_model() -> Self {
        Self::new()
            .lookup(Lookup::Method)
            .perms("GET", [])
            .perms("OPTIONS", [])
            .perms("HEAD", [])
            .perms("POST", [ADD])
            .perms("PUT", [])
            .perms("PATCH", [])
            .perms("DELETE", [])
            .obj_perms("GET", [])
            .obj_perms("OPTIONS", [])
            .obj_perms("HEAD", [])
            .obj_perms("POST", [])
            .obj_perms("PUT", [CHANGE])
            .obj_perms("PATCH", [CHANGE])
            .obj_perms("DELETE", [DELETE])
            .read_only_keys(["GET", "HEAD", "OPTIONS"])
            .read_only_key(Some("GET"))
    }

    pub fn lookup(mut self, val: Lookup) -> Self {
        self.lookup = val;
        self
    }

    /// Set the general permissions required for key.
    pub fn perms<const N: usize>(mut self, key: &str, templates: [&str; N]) -> Self {
        if let Err(e) = self.perms_map.set(key, templates) {
            self.error.get_or_insert(e);
        }
        self
    }

    /// Set the object permissions required for key.
    pub fn obj_perms<const N: usize>(mut self, key: &str, templates: [&str; N]) -> Self {
        if let Err(e) = self.obj_perms_map.set(key, templates) {
            self.error.get_or_insert(e);
        }
        self
    }

    /// Replace the general permission table.
    pub fn perms_map(mut self, val: PermissionTable) -> Self {
        self.perms_map = val;
        self
    }

    /// Replace the object permission table.
    pub fn obj_perms_map(mut self, val: PermissionTable) -> Self {
        self.obj_perms_map = val;
        self
    }

    /// Keys that are read only; an object denial for these is reported
    /// as `NotFound` without further checks.
    pub fn read_only_keys<const N: usize>(mut self, keys: [&str; N]) -> Self {
        self.read_only_keys = keys.into_iter()
            .map(str::to_string)
            .collect();
        self
    }

    /// The key whose object permissions decide between `Forbidden` and
    /// `NotFound` on an object denial.  With `None` every object denial
    /// is reported as `Forbidden`.
    pub fn read_only_key(mut self, val: Option<&str>) -> Self {
        self.read_only_key = val.map(str::to_string);
        self
    }

    pub fn authenticated_users_only(mut self, val: bool) -> Self {
        self.authenticated_users_only = val;
        self
    }

    pub fn backend(mut self, val: ObjectPermissionBackend) -> Self {
        self.backend = val;
        self
    }

    pub fn build(self) -> Result<AccessPolicy, Error> {
        if let Some(e) = self.error {
            return Err(e);
        }
        Ok(AccessPolicy {
            lookup: self.lookup,
            perms_map: self.perms_map,
            obj_perms_map: self.obj_perms_map,
            read_only_keys: self.read_only_keys,
            read_only_key: self.read_only_key,
            authenticated_users_only: self.authenticated_users_only,
            backend: self.backend,
        })
    }
}

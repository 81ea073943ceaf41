//! Action based access policy
//!
//! Authorizes a request in two stages.  The general stage checks the
//! general permissions required for the request against the actor
//! without reference to any instance, e.g. whether the actor may create
//! instances at all.  The object stage applies when an instance is
//! addressed, checking the object permissions required for the request
//! against that instance through the [`ObjectPermissionBackend`].
//!
//! When the object stage denies, the denial is reported as `NotFound`
//! rather than `Forbidden` unless the actor would have been permitted
//! to read the instance, so that actors may not learn whether an
//! instance they cannot see exists.

use bpperm::ObjectPermissionBackend;
use std::collections::BTreeSet;

use crate::table::PermissionTable;

mod builder;
mod impls;

pub use builder::Builder;

/// What the permission tables are keyed by.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Lookup {
    /// The action resolved for the request.
    #[default]
    Action,
    /// The request method, e.g. `GET`.
    Method,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccessPolicy {
    lookup: Lookup,
    perms_map: PermissionTable,
    obj_perms_map: PermissionTable,
    read_only_keys: BTreeSet<String>,
    read_only_key: Option<String>,
    authenticated_users_only: bool,
    backend: ObjectPermissionBackend,
}

//! Permission catalog
//!
//! Derives the permission codes that are valid for a resource type and
//! converts between the bare codename and the namespace qualified form
//! (`<namespace>.<codename>`).

use std::collections::BTreeSet;
use crate::error::{
    CodeError,
    Error,
};
use super::resource::ResourceMeta;

/// Codenames for the default permissions attached to the type.
pub fn default_codes(meta: &ResourceMeta) -> BTreeSet<String> {
    meta.default_permissions()
        .iter()
        .map(|perm| perm.codename(meta.type_name()))
        .collect()
}

/// Codenames declared by the type in addition to the defaults.
pub fn declared_codes(meta: &ResourceMeta) -> BTreeSet<String> {
    meta.declared_permissions()
        .map(|(codename, _)| codename.to_string())
        .collect()
}

/// Every valid code for the type, optionally qualified with its
/// namespace.
pub fn available_codes(meta: &ResourceMeta, qualified: bool) -> BTreeSet<String> {
    let available = meta.available_permissions();
    if qualified {
        available
            .iter()
            .map(|codename| qualify(meta.namespace(), codename))
            .collect()
    } else {
        available.clone()
    }
}

pub fn qualify(namespace: &str, codename: &str) -> String {
    format!("{namespace}.{codename}")
}

/// Split a qualified permission code into its namespace and codename.
///
/// The code must belong to the namespace of the resource type and name
/// a permission in its catalog; anything else is a mistake made by the
/// caller and is reported as such rather than treated as a denial.
pub fn split<'a>(
    meta: &ResourceMeta,
    code: &'a str,
) -> Result<(&'a str, &'a str), Error> {
    let (namespace, codename) = code.split_once('.')
        .ok_or_else(|| Error::malformed(code, CodeError::MissingNamespace))?;
    if namespace != meta.namespace() {
        return Err(Error::malformed(
            code,
            CodeError::NamespaceMismatch(meta.namespace().to_string()),
        ));
    }
    if !meta.has_codename(codename) {
        return Err(Error::malformed(
            code,
            CodeError::UnknownCodename(qualify(meta.namespace(), meta.type_name())),
        ));
    }
    Ok((namespace, codename))
}

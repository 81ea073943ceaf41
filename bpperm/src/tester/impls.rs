use bpcore::ac::{
    catalog,
    registry::PermissionSet,
    traits::PermissionProvider,
};
use std::collections::BTreeSet;

use crate::error::{
    Error,
    PermissionDenied,
};
use super::ObjectPermissionTester;

impl ObjectPermissionTester {
    pub fn new(default_permission: bool) -> Self {
        Self { default_permission }
    }

    pub fn default_permission(&self) -> bool {
        self.default_permission
    }

    fn check<A, R>(
        &self,
        permissions: Option<&PermissionSet<A, R>>,
        actor: &A,
        codename: &str,
        obj: &R,
    ) -> Result<bool, PermissionDenied>
    where
        A: ?Sized,
    {
        match permissions.and_then(|permissions| permissions.lookup(codename)) {
            Some(predicate) => predicate(actor, obj),
            None => Ok(self.default_permission),
        }
    }

    /// Check whether the actor holds the qualified permission for obj.
    pub fn has_perm<A, R>(
        &self,
        actor: &A,
        perm: &str,
        obj: &R,
    ) -> Result<bool, Error>
    where
        A: ?Sized + 'static,
        R: PermissionProvider<A>,
    {
        let (_, codename) = catalog::split(R::meta(), perm)?;
        let result = self.check(
            <R as PermissionProvider<A>>::object_permissions(),
            actor,
            codename,
            obj,
        )?;
        log::trace!("object permission {perm}: {result}");
        Ok(result)
    }

    /// Check whether the actor holds every one of the qualified
    /// permissions for obj, stopping at the first one not held.
    pub fn has_perms<A, R, S>(
        &self,
        actor: &A,
        perms: impl IntoIterator<Item = S>,
        obj: &R,
    ) -> Result<bool, Error>
    where
        A: ?Sized + 'static,
        R: PermissionProvider<A>,
        S: AsRef<str>,
    {
        self.has_perms_or(actor, perms, obj, |_| false)
    }

    /// As [`ObjectPermissionTester::has_perms`], except that a permission
    /// not held for obj is still accepted where `accept` holds for it.
    ///
    /// An outright denial is never overridden by `accept`.
    pub fn has_perms_or<A, R, S, F>(
        &self,
        actor: &A,
        perms: impl IntoIterator<Item = S>,
        obj: &R,
        accept: F,
    ) -> Result<bool, Error>
    where
        A: ?Sized + 'static,
        R: PermissionProvider<A>,
        S: AsRef<str>,
        F: Fn(&str) -> bool,
    {
        let meta = R::meta();
        let permissions = <R as PermissionProvider<A>>::object_permissions();
        for perm in perms {
            let perm = perm.as_ref();
            let (_, codename) = catalog::split(meta, perm)?;
            if self.check(permissions, actor, codename, obj)? {
                continue;
            }
            if accept(perm) {
                log::trace!("object permission {perm} accepted");
                continue;
            }
            log::trace!("object permission {perm}: false");
            return Ok(false);
        }
        Ok(true)
    }

    /// Every permission in the catalog of the type of obj that the actor
    /// holds for obj.
    ///
    /// A predicate that denies outright only excludes its own
    /// permission from the result.
    pub fn object_permissions<A, R>(
        &self,
        actor: &A,
        obj: &R,
        include_namespace: bool,
    ) -> BTreeSet<String>
    where
        A: ?Sized + 'static,
        R: PermissionProvider<A>,
    {
        let meta = R::meta();
        let permissions = <R as PermissionProvider<A>>::object_permissions();
        meta.available_permissions()
            .iter()
            .filter(|codename| self.check(permissions, actor, codename, obj)
                .unwrap_or_else(|PermissionDenied| {
                    log::trace!("object permission {codename} denied outright");
                    false
                })
            )
            .map(|codename| if include_namespace {
                catalog::qualify(meta.namespace(), codename)
            } else {
                codename.clone()
            })
            .collect()
    }
}

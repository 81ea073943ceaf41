use bpcore::ac::{
    catalog,
    traits::{
        Actor,
        PermissionProvider,
    },
};
use std::collections::BTreeSet;

use crate::{
    error::Error,
    tester::ObjectPermissionTester,
};
use super::ObjectPermissionBackend;

impl ObjectPermissionBackend {
    pub(crate) fn new(
        default_permission: bool,
        allow_anonymous_user: bool,
        include_general_permissions: bool,
    ) -> Self {
        Self {
            tester: ObjectPermissionTester::new(default_permission),
            allow_anonymous_user,
            include_general_permissions,
        }
    }

    pub fn tester(&self) -> &ObjectPermissionTester {
        &self.tester
    }

    pub fn allow_anonymous_user(&self) -> bool {
        self.allow_anonymous_user
    }

    pub fn include_general_permissions(&self) -> bool {
        self.include_general_permissions
    }

    /// Never identifies anyone.
    pub fn authenticate<C, A>(&self, _credentials: &C) -> Option<A>
    where
        C: ?Sized,
    {
        log::trace!("object permission backend does not authenticate");
        None
    }

    /// Whether the actor may be granted any object permission at all.
    pub fn check_user<A>(&self, actor: Option<&A>) -> bool
    where
        A: Actor + ?Sized,
    {
        match actor {
            Some(actor) if actor.is_active() =>
                actor.is_authenticated() || self.allow_anonymous_user,
            _ => false,
        }
    }

    pub fn has_perm<A, R>(
        &self,
        actor: Option<&A>,
        perm: &str,
        obj: Option<&R>,
    ) -> Result<bool, Error>
    where
        A: Actor + ?Sized + 'static,
        R: PermissionProvider<A>,
    {
        let actor = match actor {
            Some(actor) if self.check_user(Some(actor)) => actor,
            _ => return Ok(false),
        };
        let Some(obj) = obj else {
            return Ok(false);
        };
        if self.tester.has_perm(actor, perm, obj)? {
            return Ok(true);
        }
        if self.include_general_permissions && actor.has_general_permission(perm) {
            log::trace!("object permission {perm} accepted from general permission");
            return Ok(true);
        }
        Ok(false)
    }

    /// Whether the actor holds every one of the permissions for obj; an
    /// empty list of permissions is always held.
    pub fn has_perms<A, R, S>(
        &self,
        actor: Option<&A>,
        perms: &[S],
        obj: Option<&R>,
    ) -> Result<bool, Error>
    where
        A: Actor + ?Sized + 'static,
        R: PermissionProvider<A>,
        S: AsRef<str>,
    {
        if perms.is_empty() {
            return Ok(true);
        }
        let (actor, obj) = match (actor, obj) {
            (Some(actor), Some(obj)) if self.check_user(Some(actor)) => (actor, obj),
            _ => return Ok(false),
        };
        if !self.include_general_permissions {
            return self.tester.has_perms(actor, perms, obj);
        }
        self.tester.has_perms_or(actor, perms, obj, |perm| {
            actor.has_general_permission(perm)
        })
    }

    /// Every qualified permission the actor holds for obj.
    ///
    /// Listing permissions without an instance is not supported by this
    /// backend, so that yields an empty set.
    pub fn all_permissions<A, R>(
        &self,
        actor: Option<&A>,
        obj: Option<&R>,
    ) -> BTreeSet<String>
    where
        A: Actor + ?Sized + 'static,
        R: PermissionProvider<A>,
    {
        let (actor, obj) = match (actor, obj) {
            (Some(actor), Some(obj)) if self.check_user(Some(actor)) => (actor, obj),
            _ => return BTreeSet::new(),
        };
        let mut result = self.tester.object_permissions(actor, obj, true);
        if self.include_general_permissions {
            result.extend(catalog::available_codes(R::meta(), true)
                .into_iter()
                .filter(|code| actor.has_general_permission(code))
            );
        }
        result
    }
}

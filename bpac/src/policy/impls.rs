use bpcore::ac::{
    decision::Decision,
    resource::ResourceMeta,
    traits::{
        Actor,
        PermissionProvider,
        Resource,
    },
};
use bpperm::ObjectPermissionBackend;

use crate::{
    dispatch::Dispatch,
    error::Error,
    table::PermissionTable,
};
use super::{
    AccessPolicy,
    Builder,
    Lookup,
};

impl AccessPolicy {
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn lookup(&self) -> Lookup {
        self.lookup
    }

    pub fn perms_map(&self) -> &PermissionTable {
        &self.perms_map
    }

    pub fn obj_perms_map(&self) -> &PermissionTable {
        &self.obj_perms_map
    }

    pub fn backend(&self) -> &ObjectPermissionBackend {
        &self.backend
    }

    /// The key to look up the permission tables with for the request.
    pub fn lookup_key<'d>(&self, dispatch: &'d Dispatch<'_>) -> Result<&'d str, Error> {
        match self.lookup {
            Lookup::Action => dispatch.resolve_action(),
            Lookup::Method => Ok(dispatch.method().as_str()),
        }
    }

    fn object_check<A, R>(
        &self,
        actor: Option<&A>,
        key: &str,
        obj: &R,
    ) -> Result<bool, Error>
    where
        A: Actor + ?Sized + 'static,
        R: PermissionProvider<A>,
    {
        let perms = self.obj_perms_map
            .required(key, R::meta())
            .unwrap_or_default();
        self.backend.has_perms(actor, perms.as_slice(), Some(obj))
    }

    /// The general stage, which never considers any instance.
    pub fn has_permission<A, R>(
        &self,
        actor: Option<&A>,
        dispatch: &Dispatch<'_>,
    ) -> Result<Decision, Error>
    where
        A: Actor + ?Sized,
        R: Resource,
    {
        if dispatch.is_policy_ignored() {
            log::trace!("policy ignored for {}", dispatch.method());
            return Ok(Decision::Allowed);
        }
        let key = self.lookup_key(dispatch)?;
        let perms = self.perms_map
            .required(key, R::meta())
            .ok_or_else(|| dispatch.unsupported(Some(key)))?;
        if self.authenticated_users_only
            && !actor.is_some_and(|actor| actor.is_authenticated())
        {
            log::debug!("{key}: general stage forbidden to unauthenticated actor");
            return Ok(Decision::Forbidden);
        }
        let decision = match actor {
            _ if perms.is_empty() => Decision::Allowed,
            Some(actor) => actor.has_general_permissions(&perms).into(),
            None => Decision::Forbidden,
        };
        log::debug!("{key}: general stage requiring {perms:?}: {decision}");
        Ok(decision)
    }

    /// The object stage for obj.
    ///
    /// A key without an entry in the object permission table requires
    /// no object permission.
    pub fn has_object_permission<A, R>(
        &self,
        actor: Option<&A>,
        dispatch: &Dispatch<'_>,
        obj: &R,
    ) -> Result<Decision, Error>
    where
        A: Actor + ?Sized + 'static,
        R: PermissionProvider<A>,
    {
        if dispatch.is_policy_ignored() {
            log::trace!("policy ignored for {}", dispatch.method());
            return Ok(Decision::Allowed);
        }
        let key = self.lookup_key(dispatch)?;
        if self.object_check(actor, key, obj)? {
            log::debug!("{key}: object stage allowed");
            return Ok(Decision::Allowed);
        }
        let decision = match self.read_only_key.as_deref() {
            None => Decision::Forbidden,
            Some(_) if self.read_only_keys.contains(key) => Decision::NotFound,
            Some(read_only_key) => {
                if self.object_check(actor, read_only_key, obj)? {
                    Decision::Forbidden
                } else {
                    Decision::NotFound
                }
            }
        };
        log::debug!("{key}: object stage denied as {decision}");
        Ok(decision)
    }

    /// Authorize the request, with the object stage applied only when
    /// an instance is addressed.
    pub fn authorize<A, R>(
        &self,
        actor: Option<&A>,
        dispatch: &Dispatch<'_>,
        obj: Option<&R>,
    ) -> Result<Decision, Error>
    where
        A: Actor + ?Sized + 'static,
        R: PermissionProvider<A>,
    {
        let decision = self.has_permission::<A, R>(actor, dispatch)?;
        match obj {
            Some(obj) if decision.is_allowed() =>
                self.has_object_permission(actor, dispatch, obj),
            _ => Ok(decision),
        }
    }

    /// Ensure every code in both tables is valid for the type.
    pub fn validate(&self, meta: &ResourceMeta) -> Result<(), Error> {
        self.perms_map.validate(meta)?;
        self.obj_perms_map.validate(meta)?;
        Ok(())
    }
}

use bpcore::ac::{
    resource::ResourceMeta,
    traits::{
        Collection,
        FilterProvider,
        Resource,
    },
};
use bpperm::ObjectPermissionFilter;

use crate::{
    dispatch::Dispatch,
    error::Error,
    table::PermissionTable,
};

const VIEW: &str = "{namespace}.view_{type_name}";

/// Narrows the collection listed by a request using the object filters
/// required for its action.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionFilter {
    perms_map: PermissionTable,
    filter: ObjectPermissionFilter,
}

#[derive(Clone, Debug, Default)]
pub struct Builder {
    perms_map: PermissionTable,
    default_unfiltered: bool,
    error: Option<Error>,
}

impl Builder {
    /// Every standard action, none of which filters.
    pub fn new() -> Self {
        Self::default()
            .perms("list", [])
            .perms("create", [])
            .perms("retrieve", [])
            .perms("update", [])
            .perms("partial_update", [])
            .perms("destroy", [])
            .perms("metadata", [])
    }

    /// As [`Builder::new`], but listing requires the view filter.
    pub fn view_model() -> Self {
        Self::new()
            .perms("list", [VIEW])
            .perms("metadata", [VIEW])
    }

    /// Set the filters required for the action.
    pub fn perms<const N: usize>(mut self, action: &str, templates: [&str; N]) -> Self {
        if let Err(e) = self.perms_map.set(action, templates) {
            self.error.get_or_insert(e);
        }
        self
    }

    pub fn perms_map(mut self, val: PermissionTable) -> Self {
        self.perms_map = val;
        self
    }

    /// Leave the collection as is for an action without an entry, or
    /// for a required permission without a filter, instead of treating
    /// these as an unsupported action and an empty result respectively.
    pub fn default_unfiltered(mut self, val: bool) -> Self {
        self.default_unfiltered = val;
        self
    }

    pub fn build(self) -> Result<ActionFilter, Error> {
        if let Some(e) = self.error {
            return Err(e);
        }
        Ok(ActionFilter {
            perms_map: self.perms_map,
            filter: ObjectPermissionFilter::new(self.default_unfiltered),
        })
    }
}

impl ActionFilter {
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn perms_map(&self) -> &PermissionTable {
        &self.perms_map
    }

    pub fn validate(&self, meta: &ResourceMeta) -> Result<(), Error> {
        self.perms_map.validate(meta)
    }

    pub fn filter_collection<A, C>(
        &self,
        actor: &A,
        dispatch: &Dispatch<'_>,
        collection: C,
    ) -> Result<C, Error>
    where
        A: ?Sized + 'static,
        C: Collection + 'static,
        C::Item: FilterProvider<A, C>,
    {
        let action = dispatch.resolve_action()?;
        let meta = <C::Item as Resource>::meta();
        let perms = match self.perms_map.required(action, meta) {
            Some(perms) => perms,
            None if self.filter.default_unfiltered() => {
                log::trace!("{action}: no filters mapped; left unfiltered");
                return Ok(collection);
            }
            None => return Err(dispatch.unsupported(Some(action))),
        };
        log::debug!("{action}: filtering {} item(s) by {perms:?}", collection.len());
        self.filter.filter(actor, perms, collection)
    }
}

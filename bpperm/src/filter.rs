use bpcore::ac::{
    catalog,
    traits::{
        Collection,
        FilterProvider,
        Resource,
    },
};

use crate::error::Error;

/// Narrows a collection to the instances an actor may see, by applying
/// the object filters registered for the item type of the collection.
///
/// Filters for each required permission are applied in turn, each one
/// narrowing the result of the last.  A required permission without a
/// filter either leaves the collection as is (when unfiltered by
/// default) or empties it, at which point no further filter is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ObjectPermissionFilter {
    default_unfiltered: bool,
}

impl ObjectPermissionFilter {
    pub fn new(default_unfiltered: bool) -> Self {
        Self { default_unfiltered }
    }

    pub fn default_unfiltered(&self) -> bool {
        self.default_unfiltered
    }

    pub fn filter<A, C, S>(
        &self,
        actor: &A,
        perms: impl IntoIterator<Item = S>,
        collection: C,
    ) -> Result<C, Error>
    where
        A: ?Sized + 'static,
        C: Collection + 'static,
        C::Item: FilterProvider<A, C>,
        S: AsRef<str>,
    {
        let meta = <C::Item as Resource>::meta();
        let filters = <C::Item as FilterProvider<A, C>>::object_filters();
        let mut collection = collection;
        for perm in perms {
            let perm = perm.as_ref();
            let (_, codename) = catalog::split(meta, perm)?;
            match filters.and_then(|filters| filters.lookup(codename)) {
                Some(filter) => {
                    collection = filter(actor, collection);
                    log::trace!("filtered by {perm}: {} remaining", collection.len());
                }
                None if self.default_unfiltered => {
                    log::trace!("no filter for {perm}; left unfiltered");
                }
                None => {
                    log::trace!("no filter for {perm}; emptied");
                    return Ok(collection.none());
                }
            }
        }
        Ok(collection)
    }
}

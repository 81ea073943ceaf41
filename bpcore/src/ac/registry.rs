//! Per-type registries of object permission predicates and filters,
//! keyed by bare codename.

use std::{
    collections::HashMap,
    fmt,
};
use crate::error::PermissionDenied;

/// Decides whether the actor holds a permission for the instance.
pub type Predicate<A, R> = fn(&A, &R) -> Result<bool, PermissionDenied>;

/// Narrows a collection down to what the actor may see.
pub type ObjectFilter<A, C> = fn(&A, C) -> C;

pub struct PermissionSet<A: ?Sized, R: ?Sized>(HashMap<&'static str, Predicate<A, R>>);

pub struct FilterSet<A: ?Sized, C>(HashMap<&'static str, ObjectFilter<A, C>>);

impl<A: ?Sized, R: ?Sized> PermissionSet<A, R> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn register(
        mut self,
        codename: &'static str,
        predicate: Predicate<A, R>,
    ) -> Self {
        self.0.insert(codename, predicate);
        self
    }

    pub fn lookup(&self, codename: &str) -> Option<Predicate<A, R>> {
        self.0.get(codename).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A: ?Sized, C> FilterSet<A, C> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn register(
        mut self,
        codename: &'static str,
        filter: ObjectFilter<A, C>,
    ) -> Self {
        self.0.insert(codename, filter);
        self
    }

    pub fn lookup(&self, codename: &str) -> Option<ObjectFilter<A, C>> {
        self.0.get(codename).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<A: ?Sized, R: ?Sized> Default for PermissionSet<A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized, C> Default for FilterSet<A, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized, R: ?Sized> FromIterator<(&'static str, Predicate<A, R>)> for PermissionSet<A, R> {
    fn from_iter<I: IntoIterator<Item = (&'static str, Predicate<A, R>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<A: ?Sized, C> FromIterator<(&'static str, ObjectFilter<A, C>)> for FilterSet<A, C> {
    fn from_iter<I: IntoIterator<Item = (&'static str, ObjectFilter<A, C>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<A: ?Sized, R: ?Sized> fmt::Debug for PermissionSet<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

impl<A: ?Sized, C> fmt::Debug for FilterSet<A, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.0.keys()).finish()
    }
}

#[cfg(test)]
mod test {
    use crate::error::PermissionDenied;
    use super::*;

    struct Owner(i64);
    struct Item {
        owner: i64,
        locked: bool,
    }

    #[test]
    fn permission_set() -> anyhow::Result<()> {
        let permissions = PermissionSet::<Owner, Item>::new()
            .register("change_item", |owner, item| Ok(owner.0 == item.owner))
            .register("delete_item", |owner, item| {
                if item.locked {
                    Err(PermissionDenied)
                } else {
                    Ok(owner.0 == item.owner)
                }
            });
        assert_eq!(permissions.len(), 2);
        let item = Item { owner: 1, locked: true };

        let change = permissions.lookup("change_item")
            .expect("change_item registered");
        assert!(change(&Owner(1), &item)?);
        assert!(!change(&Owner(2), &item)?);

        let delete = permissions.lookup("delete_item")
            .expect("delete_item registered");
        assert_eq!(delete(&Owner(1), &item), Err(PermissionDenied));

        assert!(permissions.lookup("view_item").is_none());
        Ok(())
    }

    #[test]
    fn filter_set() {
        let filters: FilterSet<Owner, Vec<Item>> = [(
            "view_item",
            (|owner: &Owner, mut items: Vec<Item>| {
                items.retain(|item| item.owner == owner.0);
                items
            }) as ObjectFilter<Owner, Vec<Item>>,
        )].into_iter().collect();
        let view = filters.lookup("view_item")
            .expect("view_item registered");
        let items = view(&Owner(2), vec![
            Item { owner: 1, locked: false },
            Item { owner: 2, locked: false },
            Item { owner: 2, locked: true },
        ]);
        assert_eq!(items.len(), 2);
        assert!(filters.lookup("change_item").is_none());
        assert!(!filters.is_empty());
    }
}

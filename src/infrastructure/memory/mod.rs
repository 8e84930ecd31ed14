//! In-Memory Repositories
//!
//! Process-local implementations of the domain repository traits, used by
//! the test suite and by `storage.backend = "memory"`. Rows live in a
//! [`MemoryTable`] behind a `parking_lot::RwLock`; ids are random UUIDs like
//! the database default.
//!
//! Unique detail rows (one schedule or delivery per store, one currency per
//! country) are enforced here as well. Deleting a store removes its
//! schedule, delivery and inventory rows, as `ON DELETE CASCADE` does in
//! PostgreSQL. Other foreign keys are not enforced.

mod catalogue;
mod details;
mod locality;
mod warehouse;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::domain::{
    Category, CategoryUpdate, City, CityUpdate, Country, CountryUpdate, Currency, CurrencyUpdate,
    Delivery, DeliveryUpdate, Inventory, InventoryUpdate, Product, ProductUpdate, Schedule,
    ScheduleUpdate, Store, StoreUpdate,
};

pub use catalogue::{MemoryCategoryRepository, MemoryProductRepository};
pub use details::{MemoryDeliveryRepository, MemoryScheduleRepository};
pub use locality::{MemoryCityRepository, MemoryCountryRepository, MemoryCurrencyRepository};
pub use warehouse::{MemoryInventoryRepository, MemoryStoreRepository};

/// A stored row: has an id and timestamps.
pub(crate) trait Record: Clone + Send + Sync {
    fn id(&self) -> &str;
    fn stamp(&mut self, id: String, now: DateTime<Utc>);
    fn touch(&mut self, now: DateTime<Utc>);
}

/// A merge patch over a stored row.
pub(crate) trait Patch<T> {
    fn is_empty(&self) -> bool;
    fn apply(&self, row: &mut T);
}

macro_rules! record {
    ($($entity:ty => $update:ty),* $(,)?) => {$(
        impl Record for $entity {
            fn id(&self) -> &str {
                &self.id
            }

            fn stamp(&mut self, id: String, now: DateTime<Utc>) {
                self.id = id;
                self.created_at = now;
                self.updated_at = now;
            }

            fn touch(&mut self, now: DateTime<Utc>) {
                self.updated_at = now;
            }
        }

        impl Patch<$entity> for $update {
            fn is_empty(&self) -> bool {
                <$update>::is_empty(self)
            }

            fn apply(&self, row: &mut $entity) {
                <$update>::apply(self, row)
            }
        }
    )*};
}

record! {
    Category => CategoryUpdate,
    Product => ProductUpdate,
    Store => StoreUpdate,
    Country => CountryUpdate,
    City => CityUpdate,
    Currency => CurrencyUpdate,
    Schedule => ScheduleUpdate,
    Delivery => DeliveryUpdate,
    Inventory => InventoryUpdate,
}

/// Rows of one entity in insertion order.
///
/// Clones share the same rows, so one repository can reach another's table.
pub(crate) struct MemoryTable<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T> Clone for MemoryTable<T> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: Record> MemoryTable<T> {
    pub fn all(&self) -> Vec<T> {
        self.rows.read().clone()
    }

    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.read().iter().filter(|row| pred(row)).cloned().collect()
    }

    pub fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.rows.read().iter().find(|row| pred(row)).cloned()
    }

    pub fn find_by_id(&self, id: &str) -> Option<T> {
        self.find(|row| row.id() == id)
    }

    /// Store a copy of `row` under a fresh id and return the id.
    pub fn insert(&self, row: &T) -> String {
        push(&mut self.rows.write(), row)
    }

    /// Like [`insert`](Self::insert), but refuses when a row matching
    /// `conflict` already exists. Check and insert happen under one lock.
    pub fn insert_unless(&self, row: &T, conflict: impl Fn(&T) -> bool) -> Option<String> {
        let mut rows = self.rows.write();
        if rows.iter().any(|existing| conflict(existing)) {
            return None;
        }
        Some(push(&mut rows, row))
    }

    /// Merge `patch` into the first row matching `pred`.
    ///
    /// Returns whether such a row exists. An empty patch leaves the row,
    /// including `updated_at`, untouched.
    pub fn patch<P: Patch<T>>(&self, pred: impl Fn(&T) -> bool, patch: &P) -> bool {
        let mut rows = self.rows.write();
        match rows.iter_mut().find(|row| pred(row)) {
            Some(row) => {
                if !patch.is_empty() {
                    patch.apply(row);
                    row.touch(Utc::now());
                }
                true
            }
            None => false,
        }
    }

    /// Remove the row with `id`. Returns whether it existed.
    pub fn remove(&self, id: &str) -> bool {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        rows.len() != before
    }

    /// Remove every row matching `pred`. Returns how many went.
    pub fn remove_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|row| !pred(row));
        before - rows.len()
    }
}

fn push<T: Record>(rows: &mut Vec<T>, row: &T) -> String {
    let id = Uuid::new_v4().to_string();
    let mut row = row.clone();
    row.stamp(id.clone(), Utc::now());
    rows.push(row);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_assigns_fresh_ids() {
        let table = MemoryTable::<Country>::default();
        let a = table.insert(&Country::new("Kazakhstan"));
        let b = table.insert(&Country::new("Kazakhstan"));

        assert_ne!(a, b);
        assert_eq!(table.all().len(), 2);
        assert_eq!(table.find_by_id(&a).map(|c| c.id), Some(a));
    }

    #[test]
    fn test_insert_unless_refuses_conflicts() {
        let table = MemoryTable::<Schedule>::default();
        assert!(table
            .insert_unless(&Schedule::new("s-1", Vec::new()), |s| s.store_id == "s-1")
            .is_some());
        assert!(table
            .insert_unless(&Schedule::new("s-1", Vec::new()), |s| s.store_id == "s-1")
            .is_none());
    }

    #[test]
    fn test_empty_patch_keeps_updated_at() {
        let table = MemoryTable::<Category>::default();
        let id = table.insert(&Category::new(None, "Dairy"));
        let before = table.find_by_id(&id).map(|c| c.updated_at);

        assert!(table.patch(|c| c.id == id, &CategoryUpdate::default()));
        assert_eq!(table.find_by_id(&id).map(|c| c.updated_at), before);
    }

    #[test]
    fn test_patch_and_remove_missing_rows() {
        let table = MemoryTable::<Category>::default();
        let update = CategoryUpdate {
            name: Some("Milk".into()),
        };

        assert!(!table.patch(|c| c.id == "missing", &update));
        assert!(!table.remove("missing"));
    }

    #[test]
    fn test_clones_share_rows() {
        let table = MemoryTable::<Schedule>::default();
        let handle = table.clone();
        table.insert(&Schedule::new("s-1", Vec::new()));
        table.insert(&Schedule::new("s-2", Vec::new()));

        assert_eq!(handle.remove_where(|s| s.store_id == "s-1"), 1);
        assert_eq!(table.all().len(), 1);
        assert_eq!(handle.remove_where(|s| s.store_id == "s-1"), 0);
    }
}

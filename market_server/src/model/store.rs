//! Per-asset-class state holders.
//!
//! An `AssetStore` owns the current snapshot of one collection as an
//! `Arc<Vec<T>>`. Writers build a complete replacement and swap the `Arc`
//! under the write lock, so readers only ever see a fully formed snapshot.
//! Concurrent writers serialize on the lock; the last one wins.

use crate::model::mutator::{Mutable, mutate_all};
use chrono::{DateTime, Utc};
use market_common::Result;
use market_common::model::AssetRecord;
use rand::Rng;
use std::sync::{Arc, RwLock};

/// Shared, swappable snapshot of one asset class.
pub struct AssetStore<T> {
    records: RwLock<Arc<Vec<T>>>,
}

impl<T: AssetRecord> AssetStore<T> {
    /// Create a store seeded with `records`.
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(Arc::new(records)),
        }
    }

    /// Current snapshot. Cheap: clones the `Arc`, not the records.
    pub fn snapshot(&self) -> Result<Arc<Vec<T>>> {
        Ok(Arc::clone(&*self.records.read()?))
    }

    /// Replace the whole collection and return the new snapshot.
    pub fn replace(&self, records: Vec<T>) -> Result<Arc<Vec<T>>> {
        let next = Arc::new(records);
        *self.records.write()? = Arc::clone(&next);
        Ok(next)
    }

    /// First record whose key matches `key`, ignoring ASCII case.
    pub fn find(&self, key: &str) -> Result<Option<T>> {
        Ok(self
            .snapshot()?
            .iter()
            .find(|r| r.key().eq_ignore_ascii_case(key))
            .cloned())
    }

    /// Number of records in the current snapshot.
    pub fn len(&self) -> Result<usize> {
        Ok(self.snapshot()?.len())
    }

    /// `true` if the current snapshot holds no records.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl<T: Mutable> AssetStore<T> {
    /// Mutate every record once and publish the result as the new snapshot.
    ///
    /// The read, mutation and swap all happen under the write lock, so two
    /// overlapping callers each produce one full step.
    pub fn mutate<R: Rng + ?Sized>(&self, rng: &mut R, now: DateTime<Utc>) -> Result<Arc<Vec<T>>> {
        let mut guard = self.records.write()?;
        let next = Arc::new(mutate_all(&guard, rng, now));
        *guard = Arc::clone(&next);
        Ok(next)
    }
}

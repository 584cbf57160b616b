//! Shared state handed to every request handler.

use crate::broadcaster::Broadcaster;
use crate::config::DeliveryMode;
use crate::model::market::MarketData;
use crate::model::store::AssetStore;
use crate::model::mutator::Mutable;
use chrono::Utc;
use market_common::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::{Arc, Mutex};

/// Handles the delivery layer needs: the dataset, the push channel and the
/// generator used when requests drive mutation.
#[derive(Clone)]
pub struct AppState {
    /// Dataset shared with the scheduler.
    pub market: Arc<MarketData>,
    /// Push channel shared with the scheduler.
    pub broadcaster: Broadcaster,
    /// Active delivery variant.
    pub delivery: DeliveryMode,
    rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Build the state; `seed` fixes the pull-mode generator.
    pub fn new(
        market: Arc<MarketData>,
        broadcaster: Broadcaster,
        delivery: DeliveryMode,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            market,
            broadcaster,
            delivery,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Snapshot to answer a read with.
    ///
    /// In pull mode the store is mutated once first; in push mode the current
    /// snapshot is returned untouched.
    pub fn read<T: Mutable>(&self, store: &AssetStore<T>) -> Result<Vec<T>> {
        let snapshot = match self.delivery {
            DeliveryMode::Push => store.snapshot()?,
            DeliveryMode::Pull => {
                let mut rng = self.rng.lock()?;
                store.mutate(&mut *rng, Utc::now())?
            }
        };
        Ok(snapshot.to_vec())
    }
}

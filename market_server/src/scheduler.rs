//! Periodic mutation of every mutable asset class.
//!
//! The scheduler spawns one independent tokio task per class. Each task owns its
//! own random generator and fires at a fixed period: it mutates its class's
//! store, then publishes the new snapshot through the [`Broadcaster`]. Tasks
//! never coordinate with each other and run for the lifetime of the process.
//! A slow listener never delays a tick; missed ticks are fired in a burst.

use crate::broadcaster::Broadcaster;
use crate::model::market::MarketData;
use crate::model::mutator::Mutable;
use crate::model::store::AssetStore;
use chrono::Utc;
use log::{debug, error, info};
use market_common::{AssetClass, MarketError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Update period of each mutable asset class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intervals {
    /// Equities period.
    pub stocks: Duration,
    /// Indices period.
    pub indices: Duration,
    /// Currency pairs period.
    pub currencies: Duration,
    /// Crypto period.
    pub cryptos: Duration,
}

impl Intervals {
    /// Period of `class`, `None` for the unscheduled news feed.
    pub fn get(&self, class: AssetClass) -> Option<Duration> {
        match class {
            AssetClass::Stocks => Some(self.stocks),
            AssetClass::Indices => Some(self.indices),
            AssetClass::Currencies => Some(self.currencies),
            AssetClass::Cryptos => Some(self.cryptos),
            AssetClass::News => None,
        }
    }

    /// Reject zero periods, which would spin a task.
    pub fn validate(self) -> Result<Self> {
        for class in AssetClass::MUTABLE {
            if self.get(class).is_some_and(|p| p.is_zero()) {
                return Err(MarketError::Config(format!(
                    "update interval for {} must be greater than zero",
                    class
                )));
            }
        }
        Ok(self)
    }
}

impl Default for Intervals {
    fn default() -> Self {
        let period = |class: AssetClass| class.update_interval().unwrap_or_default();
        Self {
            stocks: period(AssetClass::Stocks),
            indices: period(AssetClass::Indices),
            currencies: period(AssetClass::Currencies),
            cryptos: period(AssetClass::Cryptos),
        }
    }
}

/// Mutate one class's store and publish the resulting snapshot.
///
/// Returns the number of listeners that received it.
pub fn tick<T: Mutable, R: Rng + ?Sized>(
    store: &AssetStore<T>,
    rng: &mut R,
    broadcaster: &Broadcaster,
) -> Result<usize> {
    let snapshot = store.mutate(rng, Utc::now())?;
    Ok(broadcaster.publish(T::snapshot_event(snapshot.to_vec())))
}

/// Owner of the per-class update timers.
pub struct UpdateScheduler {
    market: Arc<MarketData>,
    broadcaster: Broadcaster,
    intervals: Intervals,
    seed: Option<u64>,
}

impl UpdateScheduler {
    /// Create a scheduler over `market`. With a `seed`, every run produces the
    /// same sequence of draws per class.
    pub fn new(
        market: Arc<MarketData>,
        broadcaster: Broadcaster,
        intervals: Intervals,
        seed: Option<u64>,
    ) -> Self {
        Self {
            market,
            broadcaster,
            intervals,
            seed,
        }
    }

    /// Spawn one timer task per mutable class. Must be called inside a tokio runtime.
    pub fn start(&self) -> Vec<JoinHandle<()>> {
        vec![
            self.spawn_class(AssetClass::Stocks, self.intervals.stocks, |m| &m.stocks),
            self.spawn_class(AssetClass::Indices, self.intervals.indices, |m| &m.indices),
            self.spawn_class(AssetClass::Currencies, self.intervals.currencies, |m| {
                &m.currencies
            }),
            self.spawn_class(AssetClass::Cryptos, self.intervals.cryptos, |m| &m.cryptos),
        ]
    }

    fn rng_for(&self, class: AssetClass) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(class as u64)),
            None => StdRng::from_os_rng(),
        }
    }

    fn spawn_class<T: Mutable>(
        &self,
        class: AssetClass,
        period: Duration,
        store: fn(&MarketData) -> &AssetStore<T>,
    ) -> JoinHandle<()> {
        let market = Arc::clone(&self.market);
        let broadcaster = self.broadcaster.clone();
        let mut rng = self.rng_for(class);

        tokio::spawn(async move {
            info!("{} updates every {:?}", class, period);
            // first tick one full period after start so the seed is served first
            let mut timer = interval_at(Instant::now() + period, period);
            loop {
                timer.tick().await;
                match tick(store(&market), &mut rng, &broadcaster) {
                    Ok(listeners) => debug!("{} tick delivered to {} listeners", class, listeners),
                    Err(e) => error!("{} tick failed: {}", class, e),
                }
            }
        })
    }
}

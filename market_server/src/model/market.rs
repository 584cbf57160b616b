//! The full in-memory dataset: one state holder per asset class.

use crate::model::fixtures;
use crate::model::store::AssetStore;
use chrono::{DateTime, Utc};
use market_common::model::{
    AssetRecord, CryptoAsset, CurrencyPair, Equity, MarketIndex, NewsItem,
};
use market_common::{AssetClass, MarketError, Result, ServerEvent};
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Every collection the server publishes.
///
/// The four mutable classes each live in their own `AssetStore`, so a writer of
/// one class never touches another's snapshot. News is fixed at seed time.
pub struct MarketData {
    /// Equities.
    pub stocks: AssetStore<Equity>,
    /// Market indices.
    pub indices: AssetStore<MarketIndex>,
    /// Currency pairs.
    pub currencies: AssetStore<CurrencyPair>,
    /// Crypto assets.
    pub cryptos: AssetStore<CryptoAsset>,
    news: Arc<Vec<NewsItem>>,
}

impl MarketData {
    /// Build the dataset from the static fixtures, stamped with `seeded_at`.
    pub fn seeded(seeded_at: DateTime<Utc>) -> Self {
        Self {
            stocks: AssetStore::new(fixtures::equities(seeded_at)),
            indices: AssetStore::new(fixtures::indices(seeded_at)),
            currencies: AssetStore::new(fixtures::currencies(seeded_at)),
            cryptos: AssetStore::new(fixtures::cryptos(seeded_at)),
            news: Arc::new(fixtures::news(seeded_at)),
        }
    }

    /// The static news feed.
    pub fn news(&self) -> Arc<Vec<NewsItem>> {
        Arc::clone(&self.news)
    }

    /// Current record of the equity `symbol`, ignoring ASCII case.
    pub fn stock(&self, symbol: &str) -> Result<Equity> {
        self.stocks
            .find(symbol)?
            .ok_or_else(|| MarketError::SymbolNotFound(symbol.to_string()))
    }

    /// Current snapshot of `class` wrapped in its push-channel event.
    pub fn snapshot_event(&self, class: AssetClass) -> Result<ServerEvent> {
        Ok(match class {
            AssetClass::Stocks => Equity::snapshot_event(self.stocks.snapshot()?.to_vec()),
            AssetClass::Indices => MarketIndex::snapshot_event(self.indices.snapshot()?.to_vec()),
            AssetClass::Currencies => {
                CurrencyPair::snapshot_event(self.currencies.snapshot()?.to_vec())
            }
            AssetClass::Cryptos => CryptoAsset::snapshot_event(self.cryptos.snapshot()?.to_vec()),
            AssetClass::News => NewsItem::snapshot_event(self.news.to_vec()),
        })
    }

    /// One snapshot event per asset class, in declaration order.
    pub fn catch_up(&self) -> Result<Vec<ServerEvent>> {
        AssetClass::iter()
            .map(|class| self.snapshot_event(class))
            .collect()
    }
}

//! Asset classes served by the market data service.
//!
//! Each class is mutated and delivered independently: it owns its REST path,
//! its push-channel event name and its default update cadence.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum_macros::{Display, EnumIter, EnumString};

/// One independently delivered collection of market records.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
    Hash,
    Eq,
    PartialEq,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AssetClass {
    /// Equities (`/api/stocks`).
    Stocks,
    /// Market indices (`/api/indices`).
    Indices,
    /// Currency pairs (`/api/currencies`).
    Currencies,
    /// Crypto assets (`/api/cryptos`).
    Cryptos,
    /// Static news feed (`/api/news`).
    News,
}

impl AssetClass {
    /// Classes whose records are perturbed by the scheduler.
    pub const MUTABLE: [AssetClass; 4] = [
        AssetClass::Stocks,
        AssetClass::Indices,
        AssetClass::Currencies,
        AssetClass::Cryptos,
    ];

    /// Name of the push-channel event carrying this class's snapshot.
    pub fn event_name(self) -> &'static str {
        match self {
            AssetClass::Stocks => "stocks-update",
            AssetClass::Indices => "indices-update",
            AssetClass::Currencies => "currencies-update",
            AssetClass::Cryptos => "cryptos-update",
            AssetClass::News => "news-update",
        }
    }

    /// REST path returning this class's snapshot.
    pub fn api_path(self) -> String {
        format!("/api/{}", self)
    }

    /// Default server-side update cadence in milliseconds. News is static and
    /// never scheduled.
    pub const fn update_interval_ms(self) -> Option<u64> {
        match self {
            AssetClass::Stocks => Some(3_000),
            AssetClass::Indices => Some(5_000),
            AssetClass::Currencies => Some(7_000),
            AssetClass::Cryptos => Some(4_000),
            AssetClass::News => None,
        }
    }

    /// Default server-side update cadence.
    pub fn update_interval(self) -> Option<Duration> {
        self.update_interval_ms().map(Duration::from_millis)
    }

    /// Cadence the dashboard polls at in pull mode.
    pub fn poll_interval(self) -> Duration {
        self.update_interval().unwrap_or(Duration::from_secs(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Stocks".parse::<AssetClass>().unwrap(), AssetClass::Stocks);
        assert_eq!("CRYPTOS".parse::<AssetClass>().unwrap(), AssetClass::Cryptos);
        assert!("bonds".parse::<AssetClass>().is_err());
    }

    #[test]
    fn paths_and_events_follow_the_class_name() {
        assert_eq!(AssetClass::Currencies.api_path(), "/api/currencies");
        assert_eq!(AssetClass::News.event_name(), "news-update");
    }

    #[test]
    fn only_news_is_unscheduled() {
        let unscheduled: Vec<_> = AssetClass::iter()
            .filter(|c| c.update_interval().is_none())
            .collect();
        assert_eq!(unscheduled, vec![AssetClass::News]);
        assert_eq!(AssetClass::News.poll_interval(), Duration::from_secs(60));
    }

    #[test]
    fn interval_in_millis_and_duration_agree() {
        for class in AssetClass::MUTABLE {
            let ms = class.update_interval_ms().unwrap();
            assert_eq!(class.update_interval(), Some(Duration::from_millis(ms)));
        }
        assert_eq!(AssetClass::Stocks.poll_interval(), Duration::from_secs(3));
    }
}

//! Market records exchanged between the server and its consumers.
//!
//! All records are flat snapshots: the server never edits a field in place but
//! replaces whole collections. Field names serialize in camelCase to match the
//! dashboard's JSON contract; timestamps serialize as RFC 3339 UTC strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::asset::AssetClass;
use crate::event::ServerEvent;

/// Common surface of every record kind held in a snapshot collection.
pub trait AssetRecord: Clone + Send + Sync + 'static {
    /// Asset class the record belongs to.
    const CLASS: AssetClass;

    /// Unique key within the collection (symbol, or id for news).
    fn key(&self) -> &str;

    /// Wrap a full snapshot of this record kind into its push-channel event.
    fn snapshot_event(records: Vec<Self>) -> ServerEvent;
}

/// A zero divisor leaves `changePercent` non-finite, which JSON carries as
/// `null`. Read it back as NaN so one such record keeps its snapshot readable.
fn percent_or_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Listed equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equity {
    /// Ticker symbol, e.g. `AAPL`.
    pub symbol: String,
    /// Company name.
    pub name: String,
    /// Last price.
    pub price: f64,
    /// Running change since the session reference price.
    pub change: f64,
    /// Change relative to the previous value, in percent.
    #[serde(deserialize_with = "percent_or_nan")]
    pub change_percent: f64,
    /// Traded volume.
    pub volume: u64,
    /// Market capitalisation.
    pub market_cap: u64,
    /// Instant of the last mutation (or of seeding).
    pub last_updated: DateTime<Utc>,
}

/// Market index such as the S&P 500.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndex {
    /// Index symbol, e.g. `SPX`.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Index level; plays the role of price.
    pub value: f64,
    /// Running change.
    pub change: f64,
    /// Change relative to the previous value, in percent.
    #[serde(deserialize_with = "percent_or_nan")]
    pub change_percent: f64,
    /// Region the index tracks.
    pub region: String,
    /// Instant of the last mutation (or of seeding).
    pub last_updated: DateTime<Utc>,
}

/// Foreign exchange pair quoted as `FROM/TO`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyPair {
    /// Pair symbol, e.g. `EUR/USD`.
    pub symbol: String,
    /// Base currency code.
    pub from_currency: String,
    /// Quote currency code.
    pub to_currency: String,
    /// Exchange rate; plays the role of price.
    pub rate: f64,
    /// Running change.
    pub change: f64,
    /// Change relative to the previous value, in percent.
    #[serde(deserialize_with = "percent_or_nan")]
    pub change_percent: f64,
    /// Instant of the last mutation (or of seeding).
    pub last_updated: DateTime<Utc>,
}

/// Crypto asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CryptoAsset {
    /// Coin symbol, e.g. `BTC`.
    pub symbol: String,
    /// Coin name.
    pub name: String,
    /// Last price.
    pub price: f64,
    /// Running change.
    pub change: f64,
    /// Change relative to the previous value, in percent.
    #[serde(deserialize_with = "percent_or_nan")]
    pub change_percent: f64,
    /// Market capitalisation.
    pub market_cap: u64,
    /// 24h traded volume.
    pub volume: u64,
    /// Circulating supply.
    pub supply: u64,
    /// Instant of the last mutation (or of seeding).
    pub last_updated: DateTime<Utc>,
}

/// Static news headline. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    /// Unique id within the feed.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Short summary.
    pub summary: String,
    /// Publisher name.
    pub source: String,
    /// Link to the article.
    pub url: String,
    /// Optional illustration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Publication instant.
    pub published_at: DateTime<Utc>,
    /// Symbols the story relates to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_symbols: Option<Vec<String>>,
}

impl AssetRecord for Equity {
    const CLASS: AssetClass = AssetClass::Stocks;

    fn key(&self) -> &str {
        &self.symbol
    }

    fn snapshot_event(records: Vec<Self>) -> ServerEvent {
        ServerEvent::StocksUpdate(records)
    }
}

impl AssetRecord for MarketIndex {
    const CLASS: AssetClass = AssetClass::Indices;

    fn key(&self) -> &str {
        &self.symbol
    }

    fn snapshot_event(records: Vec<Self>) -> ServerEvent {
        ServerEvent::IndicesUpdate(records)
    }
}

impl AssetRecord for CurrencyPair {
    const CLASS: AssetClass = AssetClass::Currencies;

    fn key(&self) -> &str {
        &self.symbol
    }

    fn snapshot_event(records: Vec<Self>) -> ServerEvent {
        ServerEvent::CurrenciesUpdate(records)
    }
}

impl AssetRecord for CryptoAsset {
    const CLASS: AssetClass = AssetClass::Cryptos;

    fn key(&self) -> &str {
        &self.symbol
    }

    fn snapshot_event(records: Vec<Self>) -> ServerEvent {
        ServerEvent::CryptosUpdate(records)
    }
}

impl AssetRecord for NewsItem {
    const CLASS: AssetClass = AssetClass::News;

    fn key(&self) -> &str {
        &self.id
    }

    fn snapshot_event(records: Vec<Self>) -> ServerEvent {
        ServerEvent::NewsUpdate(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_equity() -> Equity {
        Equity {
            symbol: "AAPL".into(),
            name: "Apple Inc.".into(),
            price: 187.32,
            change: 1.28,
            change_percent: 0.69,
            volume: 58_394_210,
            market_cap: 2_920_000_000_000,
            last_updated: Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap(),
        }
    }

    #[test]
    fn equity_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(sample_equity()).unwrap();
        assert_eq!(json["changePercent"], 0.69);
        assert_eq!(json["marketCap"], 2_920_000_000_000u64);
        assert_eq!(json["lastUpdated"], "2024-03-01T14:30:00Z");
        assert!(json.get("change_percent").is_none());
    }

    #[test]
    fn non_finite_percent_survives_a_json_round_trip() {
        let mut equity = sample_equity();
        equity.change_percent = f64::INFINITY;

        let json = serde_json::to_string(&equity).unwrap();
        assert!(json.contains(r#""changePercent":null"#));

        let back: Equity = serde_json::from_str(&json).unwrap();
        assert!(back.change_percent.is_nan());
        assert_eq!(back.price, equity.price);
        assert_eq!(back.symbol, equity.symbol);
    }

    #[test]
    fn news_omits_absent_optional_fields() {
        let item = NewsItem {
            id: "4".into(),
            title: "Oil Prices Drop".into(),
            summary: "Crude fell.".into(),
            source: "Energy Report".into(),
            url: "#".into(),
            image_url: None,
            published_at: Utc.with_ymd_and_hms(2024, 3, 1, 4, 0, 0).unwrap(),
            related_symbols: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("imageUrl"));
        assert!(!json.contains("relatedSymbols"));

        let back: NewsItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn snapshot_event_matches_record_class() {
        let event = Equity::snapshot_event(vec![sample_equity()]);
        assert_eq!(event.name(), Equity::CLASS.event_name());
    }
}

//! Static seed data the server starts from.
//!
//! Every collection is rebuilt from these fixtures on process start; nothing is
//! persisted between runs. `seeded_at` stamps `lastUpdated` so that a snapshot
//! requested before the first tick is identical to the fixtures apart from it.

use chrono::{DateTime, Duration, Utc};
use market_common::model::{CryptoAsset, CurrencyPair, Equity, MarketIndex, NewsItem};

#[allow(clippy::too_many_arguments)]
fn equity(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    volume: u64,
    market_cap: u64,
    seeded_at: DateTime<Utc>,
) -> Equity {
    Equity {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        change_percent,
        volume,
        market_cap,
        last_updated: seeded_at,
    }
}

fn index(
    symbol: &str,
    name: &str,
    value: f64,
    change: f64,
    change_percent: f64,
    region: &str,
    seeded_at: DateTime<Utc>,
) -> MarketIndex {
    MarketIndex {
        symbol: symbol.to_string(),
        name: name.to_string(),
        value,
        change,
        change_percent,
        region: region.to_string(),
        last_updated: seeded_at,
    }
}

fn pair(
    from: &str,
    to: &str,
    rate: f64,
    change: f64,
    change_percent: f64,
    seeded_at: DateTime<Utc>,
) -> CurrencyPair {
    CurrencyPair {
        symbol: format!("{}/{}", from, to),
        from_currency: from.to_string(),
        to_currency: to.to_string(),
        rate,
        change,
        change_percent,
        last_updated: seeded_at,
    }
}

#[allow(clippy::too_many_arguments)]
fn crypto(
    symbol: &str,
    name: &str,
    price: f64,
    change: f64,
    change_percent: f64,
    market_cap: u64,
    volume: u64,
    supply: u64,
    seeded_at: DateTime<Utc>,
) -> CryptoAsset {
    CryptoAsset {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change,
        change_percent,
        market_cap,
        volume,
        supply,
        last_updated: seeded_at,
    }
}

/// Seed equities.
pub fn equities(seeded_at: DateTime<Utc>) -> Vec<Equity> {
    vec![
        equity("AAPL", "Apple Inc.", 187.32, 1.28, 0.69, 58_394_210, 2_920_000_000_000, seeded_at),
        equity("MSFT", "Microsoft Corp.", 402.65, 3.71, 0.93, 22_154_780, 2_990_000_000_000, seeded_at),
        equity("GOOGL", "Alphabet Inc.", 157.95, -0.63, -0.40, 18_729_340, 1_980_000_000_000, seeded_at),
        equity("AMZN", "Amazon.com Inc.", 179.83, 1.02, 0.57, 27_194_600, 1_870_000_000_000, seeded_at),
        equity("NVDA", "NVIDIA Corp.", 950.02, 18.75, 2.01, 42_638_210, 2_340_000_000_000, seeded_at),
        equity("TSLA", "Tesla Inc.", 237.47, -3.25, -1.35, 67_129_580, 756_000_000_000, seeded_at),
        equity("META", "Meta Platforms Inc.", 474.99, 5.12, 1.09, 15_283_940, 1_215_000_000_000, seeded_at),
        equity("V", "Visa Inc.", 267.80, -1.05, -0.39, 8_943_760, 548_000_000_000, seeded_at),
    ]
}

/// Seed market indices.
pub fn indices(seeded_at: DateTime<Utc>) -> Vec<MarketIndex> {
    vec![
        index("SPX", "S&P 500", 5123.41, 34.85, 0.68, "United States", seeded_at),
        index("DJI", "Dow Jones", 38239.98, 125.68, 0.33, "United States", seeded_at),
        index("COMP", "NASDAQ", 16780.30, 183.05, 1.10, "United States", seeded_at),
        index("N225", "Nikkei 225", 38400.00, -156.34, -0.41, "Japan", seeded_at),
        index("FTSE", "FTSE 100", 8127.35, 54.32, 0.67, "United Kingdom", seeded_at),
        index("DAX", "DAX", 17850.50, -23.45, -0.13, "Germany", seeded_at),
    ]
}

/// Seed currency pairs.
pub fn currencies(seeded_at: DateTime<Utc>) -> Vec<CurrencyPair> {
    vec![
        pair("EUR", "USD", 1.0834, 0.0023, 0.21, seeded_at),
        pair("USD", "JPY", 151.59, -0.43, -0.28, seeded_at),
        pair("GBP", "USD", 1.2718, 0.0035, 0.28, seeded_at),
        pair("USD", "CAD", 1.3642, -0.0015, -0.11, seeded_at),
        pair("USD", "CHF", 0.9037, -0.0028, -0.31, seeded_at),
        pair("AUD", "USD", 0.6628, 0.0014, 0.21, seeded_at),
    ]
}

/// Seed crypto assets.
pub fn cryptos(seeded_at: DateTime<Utc>) -> Vec<CryptoAsset> {
    vec![
        crypto("BTC", "Bitcoin", 65841.25, 1203.45, 1.86, 1_293_000_000_000, 28_740_000_000, 19_637_500, seeded_at),
        crypto("ETH", "Ethereum", 3487.92, 62.34, 1.82, 418_700_000_000, 14_280_000_000, 120_100_000, seeded_at),
        crypto("BNB", "Binance Coin", 567.39, -12.86, -2.22, 87_900_000_000, 2_945_000_000, 155_000_000, seeded_at),
        crypto("SOL", "Solana", 143.28, 8.57, 6.36, 61_500_000_000, 4_720_000_000, 429_700_000, seeded_at),
        crypto("XRP", "XRP", 0.52, -0.008, -1.51, 28_700_000_000, 1_890_000_000, 55_200_000_000, seeded_at),
    ]
}

/// Static news feed; `publishedAt` is relative to `seeded_at`.
pub fn news(seeded_at: DateTime<Utc>) -> Vec<NewsItem> {
    let hours_ago = |h: i64| seeded_at - Duration::hours(h);
    let symbols = |s: &[&str]| Some(s.iter().map(|s| s.to_string()).collect());

    vec![
        NewsItem {
            id: "1".into(),
            title: "Federal Reserve Signals Potential Rate Cuts Later This Year".into(),
            summary: "The Federal Reserve indicated it may begin cutting interest rates later this year if inflation continues to moderate, according to minutes from the recent FOMC meeting.".into(),
            source: "Financial Times".into(),
            url: "#".into(),
            image_url: None,
            published_at: hours_ago(2),
            related_symbols: symbols(&["SPX", "DJI"]),
        },
        NewsItem {
            id: "2".into(),
            title: "Apple Announces New AI Features for iPhone".into(),
            summary: "Apple unveiled new AI capabilities for the upcoming iPhone models at its annual developer conference, highlighting privacy-focused on-device processing.".into(),
            source: "Tech Insider".into(),
            url: "#".into(),
            image_url: Some("https://images.unsplash.com/photo-1611186871348-b1ce696e52c9?q=80&w=1470&auto=format&fit=crop".into()),
            published_at: hours_ago(5),
            related_symbols: symbols(&["AAPL"]),
        },
        NewsItem {
            id: "3".into(),
            title: "NVIDIA Surpasses $2 Trillion Market Cap on AI Chip Demand".into(),
            summary: "NVIDIA's stock reached new heights, pushing its market cap above $2 trillion as demand for AI chips continues to exceed expectations.".into(),
            source: "Market Watch".into(),
            url: "#".into(),
            image_url: None,
            published_at: hours_ago(8),
            related_symbols: symbols(&["NVDA"]),
        },
        NewsItem {
            id: "4".into(),
            title: "Oil Prices Drop Amid Concerns of Slowing Global Demand".into(),
            summary: "Crude oil prices fell more than 2% on Thursday as investors weighed reports suggesting slower-than-expected global economic growth.".into(),
            source: "Energy Report".into(),
            url: "#".into(),
            image_url: None,
            published_at: hours_ago(10),
            related_symbols: None,
        },
        NewsItem {
            id: "5".into(),
            title: "Tesla Deliveries Beat Estimates Despite EV Market Slowdown".into(),
            summary: "Tesla reported quarterly deliveries that exceeded analyst expectations, bucking the trend of a broader slowdown in electric vehicle sales.".into(),
            source: "Auto Insights".into(),
            url: "#".into(),
            image_url: Some("https://images.unsplash.com/photo-1617788138017-80ad40651399?q=80&w=1632&auto=format&fit=crop".into()),
            published_at: hours_ago(12),
            related_symbols: symbols(&["TSLA"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_common::model::AssetRecord;
    use std::collections::HashSet;

    fn assert_unique_keys<T: AssetRecord>(records: &[T]) {
        let keys: HashSet<&str> = records.iter().map(AssetRecord::key).collect();
        assert_eq!(keys.len(), records.len(), "duplicate key in {}", T::CLASS);
    }

    #[test]
    fn keys_are_unique_per_collection() {
        let now = Utc::now();
        assert_unique_keys(&equities(now));
        assert_unique_keys(&indices(now));
        assert_unique_keys(&currencies(now));
        assert_unique_keys(&cryptos(now));
        assert_unique_keys(&news(now));
    }

    #[test]
    fn primary_values_start_positive() {
        let now = Utc::now();
        assert!(equities(now).iter().all(|e| e.price > 0.0));
        assert!(indices(now).iter().all(|i| i.value > 0.0));
        assert!(currencies(now).iter().all(|c| c.rate > 0.0));
        assert!(cryptos(now).iter().all(|c| c.price > 0.0));
    }

    #[test]
    fn news_is_published_before_seeding() {
        let now = Utc::now();
        let feed = news(now);
        assert_eq!(feed.len(), 5);
        assert_eq!(feed[0].published_at, now - Duration::hours(2));
        assert!(feed.iter().all(|n| n.published_at < now));
    }
}

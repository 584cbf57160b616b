//! One-line renderings of snapshot events for the terminal.

use market_common::ServerEvent;
use market_common::api::ErrorResponse;

fn signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn quote(symbol: &str, price: f64, change_percent: f64) -> String {
    let decimals = if price < 1.0 { 4 } else { 2 };
    format!(
        "{} {:.*} ({}%)",
        symbol,
        decimals,
        price,
        signed(change_percent)
    )
}

/// Describe `event` as `"<event>: <n> records, <lead record>"`.
pub fn describe(event: &ServerEvent) -> String {
    let lead = match event {
        ServerEvent::StocksUpdate(v) => v.first().map(|s| quote(&s.symbol, s.price, s.change_percent)),
        ServerEvent::IndicesUpdate(v) => v.first().map(|i| quote(&i.symbol, i.value, i.change_percent)),
        ServerEvent::CurrenciesUpdate(v) => v.first().map(|c| quote(&c.symbol, c.rate, c.change_percent)),
        ServerEvent::CryptosUpdate(v) => v.first().map(|c| quote(&c.symbol, c.price, c.change_percent)),
        ServerEvent::NewsUpdate(v) => v.first().map(|n| format!("\"{}\" ({})", n.title, n.source)),
        ServerEvent::StockUpdate(s) => {
            return format!("{}: {}", event.name(), quote(&s.symbol, s.price, s.change_percent));
        }
        ServerEvent::Error(ErrorResponse { error }) => {
            return format!("{}: {}", event.name(), error);
        }
    };
    match lead {
        Some(lead) => format!("{}: {} records, {}", event.name(), event.len(), lead),
        None => format!("{}: empty", event.name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use market_common::model::{CryptoAsset, Equity};

    fn aapl() -> Equity {
        Equity {
            symbol: "AAPL".into(),
            name: "Apple Inc.".into(),
            price: 187.79,
            change: 1.75,
            change_percent: 0.94,
            volume: 52_341_234,
            market_cap: 2_920_000_000_000,
            last_updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn snapshot_leads_with_first_record() {
        let event = ServerEvent::StocksUpdate(vec![aapl()]);
        assert_eq!(describe(&event), "stocks-update: 1 records, AAPL 187.79 (+0.94%)");
    }

    #[test]
    fn sub_unit_prices_keep_four_decimals() {
        let xrp = CryptoAsset {
            symbol: "XRP".into(),
            name: "Ripple".into(),
            price: 0.5225,
            change: -0.0055,
            change_percent: -1.04,
            market_cap: 28_000_000_000,
            volume: 1_200_000_000,
            supply: 54_000_000_000,
            last_updated: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        let event = ServerEvent::CryptosUpdate(vec![xrp]);
        assert_eq!(describe(&event), "cryptos-update: 1 records, XRP 0.5225 (-1.04%)");
    }

    #[test]
    fn errors_and_empty_snapshots() {
        let event = ServerEvent::Error(ErrorResponse::new("Stock not found"));
        assert_eq!(describe(&event), "error: Stock not found");
        assert_eq!(describe(&ServerEvent::NewsUpdate(Vec::new())), "news-update: empty");
    }
}

//! Push-channel frames exchanged over the WebSocket.
//!
//! Every frame is a JSON object `{"event": "<name>", "data": <payload>}`.
//! Snapshot events always carry a full collection, never a delta.

use serde::{Deserialize, Serialize};

use crate::api::ErrorResponse;
use crate::asset::AssetClass;
use crate::model::{CryptoAsset, CurrencyPair, Equity, MarketIndex, NewsItem};

/// Frame sent by the server to push listeners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Full equity snapshot.
    StocksUpdate(Vec<Equity>),
    /// Full index snapshot.
    IndicesUpdate(Vec<MarketIndex>),
    /// Full currency pair snapshot.
    CurrenciesUpdate(Vec<CurrencyPair>),
    /// Full crypto snapshot.
    CryptosUpdate(Vec<CryptoAsset>),
    /// The static news feed.
    NewsUpdate(Vec<NewsItem>),
    /// Single equity, answering a `subscribe-stock` request.
    StockUpdate(Equity),
    /// Request-level failure reported to one listener.
    Error(ErrorResponse),
}

impl ServerEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match (self, self.asset_class()) {
            (_, Some(class)) => class.event_name(),
            (ServerEvent::StockUpdate(_), None) => "stock-update",
            (_, None) => "error",
        }
    }

    /// Asset class of a snapshot event; `None` for single-record and error frames.
    pub fn asset_class(&self) -> Option<AssetClass> {
        match self {
            ServerEvent::StocksUpdate(_) => Some(AssetClass::Stocks),
            ServerEvent::IndicesUpdate(_) => Some(AssetClass::Indices),
            ServerEvent::CurrenciesUpdate(_) => Some(AssetClass::Currencies),
            ServerEvent::CryptosUpdate(_) => Some(AssetClass::Cryptos),
            ServerEvent::NewsUpdate(_) => Some(AssetClass::News),
            ServerEvent::StockUpdate(_) | ServerEvent::Error(_) => None,
        }
    }

    /// Number of records carried by the frame.
    pub fn len(&self) -> usize {
        match self {
            ServerEvent::StocksUpdate(v) => v.len(),
            ServerEvent::IndicesUpdate(v) => v.len(),
            ServerEvent::CurrenciesUpdate(v) => v.len(),
            ServerEvent::CryptosUpdate(v) => v.len(),
            ServerEvent::NewsUpdate(v) => v.len(),
            ServerEvent::StockUpdate(_) => 1,
            ServerEvent::Error(_) => 0,
        }
    }

    /// `true` when the frame carries no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encode the frame as a JSON text payload.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Frame sent by a listener to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientRequest {
    /// Ask for the current record of one equity.
    SubscribeStock(String),
}

//! Client-side error type.
//!
//! Wraps the shared `MarketError` together with the transport failures only
//! the client sees (HTTP requests and the WebSocket connection).
use market_common::MarketError;
use thiserror::Error;

/// Unified error type of the client binary.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Error shared with the server crate.
    #[error(transparent)]
    Market(#[from] MarketError),

    /// REST request failed or returned an error status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Push channel failed.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    /// Frame or body was not valid JSON for the expected type.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

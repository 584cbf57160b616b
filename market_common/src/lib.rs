//!
//! Common types shared by the market data server and its terminal client.
//!
//! This crate aggregates:
//! - `error` - unified error type `MarketError` used across the workspace.
//! - `result` - handy `Result<T, MarketError>` alias.
//! - `asset` - asset classes, their push-channel event names and default cadences.
//! - `model` - market records (equities, indices, currency pairs, cryptos, news).
//! - `event` - push-channel frames exchanged over the WebSocket.
//! - `api` - REST payloads that are not plain record arrays.
//! - `net` - networking constants and small helpers.
#![warn(missing_docs)]
pub mod api;
pub mod asset;
pub mod error;
pub mod event;
pub mod model;
pub mod net;
pub mod result;

pub use asset::AssetClass;
pub use error::MarketError;
pub use event::{ClientRequest, ServerEvent};
pub use result::Result;

//! Mock market data server.
//!
//! The server seeds an in-memory dataset (equities, indices, currency pairs,
//! crypto assets and a fixed news feed) and keeps perturbing it with a small
//! random walk. Its building blocks:
//!
//! - `model` - fixtures, the price mutator and the per-class `AssetStore`s.
//! - `scheduler` - one timer task per asset class mutating its store.
//! - `broadcaster` - fan-out of snapshot events to push listeners.
//! - `http` / `ws` - the REST routes and the WebSocket push channel.
//! - `config` - CLI/environment configuration, including the delivery mode.
//!
//! Delivery comes in two variants: in push mode the scheduler drives mutation
//! and broadcasts each new snapshot, while REST reads return the current one.
//! In pull mode there are no timers and each REST request mutates its
//! collection once before answering.
#![warn(missing_docs)]
pub mod broadcaster;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod scheduler;
pub mod state;
pub mod ws;

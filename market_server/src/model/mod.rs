//! Domain models and utilities for the market data server.
//!
//! This module groups the in-memory dataset and the logic that perturbs it:
//! - `fixtures` - static seed data for every asset class.
//! - `mutator` - the synthetic random walk applied to each record.
//! - `store` - `AssetStore`, the swappable snapshot holder of one asset class.
//! - `market` - `MarketData`, one store per class plus the fixed news feed.

pub mod fixtures;
pub mod market;
pub mod mutator;
pub mod store;

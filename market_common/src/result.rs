//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `MarketError`, so functions can simply return `Result<T>`.
use crate::error::MarketError;

/// Workspace-wide `Result` alias with `MarketError` as the default error.
pub type Result<T, E = MarketError> = std::result::Result<T, E>;

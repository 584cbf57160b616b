//! REST payloads that are not plain record arrays.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message reported when an equity symbol is unknown.
pub const STOCK_NOT_FOUND: &str = "Stock not found";

/// Body of every error response and of push-channel `error` frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    /// Build an error body from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Liveness payload returned by `/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `OK` while the process serves requests.
    pub status: String,
    /// Instant the probe was answered.
    pub timestamp: DateTime<Utc>,
    /// Service name and delivery mode.
    pub service: String,
}

impl HealthResponse {
    /// Healthy response stamped with `timestamp`.
    pub fn ok(service: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            status: String::from("OK"),
            timestamp,
            service: service.into(),
        }
    }
}

//! Error types shared between client and server.
//!
//! The `MarketError` enum unifies the failure cases of the workspace: I/O,
//! JSON encoding, poisoned state locks, boundary lookups and configuration,
//! allowing crates to propagate a single error type with `?`.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum MarketError {
    /// I/O error originating from sockets or the listener.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// A requested symbol is absent from the current collection.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// Invalid configuration value (zero interval, unparsable address, ...).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Channel send failed (e.g., receiver dropped); contains a short context string.
    #[error("Channel send failed: {0}")]
    ChannelSend(String),

    /// Error indicating a poisoned state lock was encountered.
    #[error("Lock poisoned: {0}")]
    LockPoisoned(String),
}

impl<T> From<PoisonError<T>> for MarketError {
    fn from(err: PoisonError<T>) -> Self {
        MarketError::LockPoisoned(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn poisoned_lock_converts_into_lock_error() {
        let lock = Arc::new(Mutex::new(0));
        let cloned = Arc::clone(&lock);
        let _ = std::thread::spawn(move || {
            let _guard = cloned.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        let err: MarketError = lock.lock().unwrap_err().into();
        assert!(matches!(err, MarketError::LockPoisoned(_)));
    }

    #[test]
    fn symbol_not_found_names_the_symbol() {
        let err = MarketError::SymbolNotFound("XYZ".into());
        assert_eq!(err.to_string(), "Symbol not found: XYZ");
    }
}

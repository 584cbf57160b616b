//! Loading state of one polled asset class.
//!
//! A feed starts `Loading` and stays there until the first fetch completes.
//! If that first fetch fails the feed is `Failed` and shows the error text
//! until a later poll succeeds. Once data has been shown, a failed poll keeps
//! the last data and marks it `Stale`; there is no retry beyond the next
//! scheduled poll.

use std::fmt;

/// Display state of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// No fetch has completed yet.
    Loading,
    /// Last fetch succeeded with this many records.
    Ready {
        /// Records in the last snapshot.
        records: usize,
    },
    /// Data was shown before, but the latest fetch failed.
    Stale {
        /// Records in the last good snapshot.
        records: usize,
        /// Why the latest fetch failed.
        error: String,
    },
    /// Nothing has ever loaded.
    Failed(String),
}

impl FeedState {
    /// Apply a successful fetch of `records` records.
    pub fn on_success(&mut self, records: usize) {
        *self = FeedState::Ready { records };
    }

    /// Apply a failed fetch.
    pub fn on_failure(&mut self, error: impl Into<String>) {
        let error = error.into();
        *self = match self {
            FeedState::Ready { records } | FeedState::Stale { records, .. } => FeedState::Stale {
                records: *records,
                error,
            },
            FeedState::Loading | FeedState::Failed(_) => FeedState::Failed(error),
        };
    }

    /// `true` while there is data to render.
    pub fn has_data(&self) -> bool {
        matches!(self, FeedState::Ready { .. } | FeedState::Stale { .. })
    }
}

impl fmt::Display for FeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedState::Loading => f.write_str("loading..."),
            FeedState::Ready { records } => write!(f, "{} records", records),
            FeedState::Stale { records, error } => {
                write!(f, "{} records (refresh failed: {})", records, error)
            }
            FeedState::Failed(error) => write!(f, "failed to load: {}", error),
        }
    }
}

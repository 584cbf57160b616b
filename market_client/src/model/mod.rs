//! Client-side view models.
//!
//! - `feed` - per-class loading/ready/failed state of a polled collection.
//! - `summary` - one-line renderings of snapshot events for the terminal.
pub mod feed;
pub mod summary;

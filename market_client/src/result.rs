//! Crate-wide result alias defaulting to `ClientError`.
use crate::error::ClientError;

/// Convenient alias for `std::result::Result<T, ClientError>`.
pub type Result<T, E = ClientError> = std::result::Result<T, E>;

//! HTTP-facing error type.
//!
//! Boundary failures become structured JSON bodies (`{"error": "..."}`) with
//! the matching status code. Internal failures are logged and reported as 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{debug, error};
use market_common::MarketError;
use market_common::api::{ErrorResponse, STOCK_NOT_FOUND};
use thiserror::Error;

/// Error returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested record or route does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Verb not supported on a read-only endpoint.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Anything raised by the dataset itself.
    #[error(transparent)]
    Internal(MarketError),
}

impl From<MarketError> for ApiError {
    fn from(err: MarketError) -> Self {
        match err {
            MarketError::SymbolNotFound(symbol) => {
                debug!("Stock lookup missed: {}", symbol);
                ApiError::NotFound(String::from(STOCK_NOT_FOUND))
            }
            other => ApiError::Internal(other),
        }
    }
}

impl ApiError {
    /// HTTP status of the error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            error!("Request failed: {}", e);
        }
        (self.status(), Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_symbol_maps_to_404() {
        let err = ApiError::from(MarketError::SymbolNotFound("XYZ".into()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Stock not found");
    }

    #[test]
    fn dataset_failures_map_to_500() {
        let err = ApiError::from(MarketError::LockPoisoned("stocks".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

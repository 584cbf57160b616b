//! REST routes of the delivery layer.
//!
//! Read endpoints serve full snapshots. What "read" means depends on the
//! delivery mode (see [`AppState::read`]). Only `GET` is routed; any other
//! verb gets a structured 405 and unknown paths a structured 404. CORS is open
//! to any origin because the dashboard runs from a separate dev origin.

use crate::config::DeliveryMode;
use crate::error::ApiError;
use crate::state::AppState;
use crate::ws;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, header};
use axum::routing::{MethodRouter, get};
use axum::{Json, Router};
use chrono::Utc;
use market_common::MarketError;
use market_common::api::HealthResponse;
use market_common::model::{CryptoAsset, CurrencyPair, Equity, MarketIndex, NewsItem};
use market_common::net::WS_PATH;
use tower_http::cors::{Any, CorsLayer};

/// Service name reported by `/health`.
pub const SERVICE_NAME: &str = "Market Pulse API";

/// Build the full router.
///
/// # Routes
///
/// - `GET /api/stocks`, `/api/indices`, `/api/currencies`, `/api/cryptos`, `/api/news`
/// - `GET /api/stock/:symbol` - one equity, case-insensitive
/// - `GET /health`, `/api/health` - liveness
/// - `GET /ws` - push channel (push mode only)
pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/api/stocks", read_only(get(stocks)))
        .route("/api/stock/:symbol", read_only(get(stock_by_symbol)))
        .route("/api/indices", read_only(get(indices)))
        .route("/api/currencies", read_only(get(currencies)))
        .route("/api/cryptos", read_only(get(cryptos)))
        .route("/api/news", read_only(get(news)))
        .route("/health", read_only(get(health)))
        .route("/api/health", read_only(get(health)));

    if state.delivery == DeliveryMode::Push {
        router = router.route(WS_PATH, get(ws::upgrade));
    }

    router
        .fallback(not_found)
        .layer(cors())
        .with_state(state)
}

fn read_only(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.options(options_ok).fallback(method_not_allowed)
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

async fn stocks(State(state): State<AppState>) -> Result<Json<Vec<Equity>>, ApiError> {
    Ok(Json(state.read(&state.market.stocks)?))
}

async fn stock_by_symbol(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<Equity>, ApiError> {
    let stocks = state.read(&state.market.stocks)?;
    let stock = stocks
        .into_iter()
        .find(|s| s.symbol.eq_ignore_ascii_case(&symbol))
        .ok_or(MarketError::SymbolNotFound(symbol))?;
    Ok(Json(stock))
}

async fn indices(State(state): State<AppState>) -> Result<Json<Vec<MarketIndex>>, ApiError> {
    Ok(Json(state.read(&state.market.indices)?))
}

async fn currencies(State(state): State<AppState>) -> Result<Json<Vec<CurrencyPair>>, ApiError> {
    Ok(Json(state.read(&state.market.currencies)?))
}

async fn cryptos(State(state): State<AppState>) -> Result<Json<Vec<CryptoAsset>>, ApiError> {
    Ok(Json(state.read(&state.market.cryptos)?))
}

async fn news(State(state): State<AppState>) -> Json<Vec<NewsItem>> {
    Json(state.market.news().to_vec())
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(
        format!("{} ({})", SERVICE_NAME, state.delivery),
        Utc::now(),
    ))
}

/// Bare `OPTIONS` without preflight headers; real preflights never get here.
async fn options_ok() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

async fn not_found() -> ApiError {
    ApiError::NotFound(String::from("Not found"))
}

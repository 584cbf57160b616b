//! Mock market data server binary.
//!
//! Wires the dataset, the update scheduler and the HTTP/WebSocket delivery
//! layer together and serves them until Ctrl+C.
//!
//! - Bind address: `0.0.0.0:3001` unless `--host`/`--port` (or `HOST`/`PORT`) say otherwise.
//! - `--delivery push` (default): timers mutate and broadcast over `/ws`.
//! - `--delivery pull`: every REST request mutates its collection once.
use chrono::Utc;
use clap::Parser;
use log::{info, warn};
use market_common::MarketError;
use market_server::broadcaster::Broadcaster;
use market_server::config::{DeliveryMode, ServerConfig};
use market_server::http;
use market_server::model::market::MarketData;
use market_server::scheduler::UpdateScheduler;
use market_server::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), MarketError> {
    init_logger();
    let config = ServerConfig::parse();
    let intervals = config.intervals()?;

    let market = Arc::new(MarketData::seeded(Utc::now()));
    let broadcaster = Broadcaster::default();

    if config.delivery == DeliveryMode::Push {
        UpdateScheduler::new(
            Arc::clone(&market),
            broadcaster.clone(),
            intervals,
            config.seed,
        )
        .start();
    }

    let state = AppState::new(market, broadcaster, config.delivery, config.seed);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(
        "Market data server running on {} ({} delivery)",
        listener.local_addr()?,
        config.delivery
    );

    axum::serve(listener, http::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Ctrl+C received. Shutting down server..."),
        Err(e) => {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

//! Market Client - a terminal consumer of the market data server.
//!
//! In `stream` mode it listens on the WebSocket push channel and prints a
//! one-line summary of every snapshot; in `poll` mode it polls the REST
//! endpoints at the dashboard cadence and tracks a loading/failed/ready state
//! per asset class.
//!
//! Usage example (CLI):
//! ```bash
//! market_client --server http://localhost:3001 --mode stream --subscribe AAPL
//! market_client --mode poll --classes stocks,cryptos
//! ```
#![warn(missing_docs)]
mod args;
mod error;
mod model;
mod poller;
mod result;
mod stream;

use crate::args::{Args, Mode};
use crate::error::ClientError;
use clap::Parser;
use log::{error, info};

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    init_logger();
    let args = Args::parse();

    let session = async {
        match args.mode {
            Mode::Stream => stream::run(&args.server, args.subscribe.as_deref()).await,
            Mode::Poll => poller::run(&args.server, &args.classes).await,
        }
    };

    tokio::select! {
        outcome = session => {
            if let Err(e) = &outcome {
                error!("Failed to load from {}: {}", args.server, e);
            }
            outcome
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, shutting down");
            Ok(())
        }
    }
}

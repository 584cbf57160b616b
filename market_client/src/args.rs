//! Command-line arguments for the market client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, ValueEnum};
use market_common::AssetClass;

/// How the client consumes the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Listen on the WebSocket push channel.
    Stream,
    /// Poll the REST endpoints at the dashboard's cadence.
    Poll,
}

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the market data server.
    #[clap(long, default_value = "http://localhost:3001")]
    pub server: String,

    /// Consumption mode.
    #[clap(long, value_enum, default_value_t = Mode::Stream)]
    pub mode: Mode,

    /// Stream mode: request the current record of one equity after connecting.
    #[clap(long)]
    pub subscribe: Option<String>,

    /// Poll mode: asset classes to poll, comma separated.
    #[clap(
        long,
        value_enum,
        value_delimiter = ',',
        default_value = "stocks,indices,currencies,cryptos,news"
    )]
    pub classes: Vec<AssetClass>,
}

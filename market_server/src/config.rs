//! Command-line and environment configuration of the server.
//!
//! Every flag can also be set through the environment, so the usual
//! `PORT=8080 market_server` deployment keeps working.
use crate::scheduler::Intervals;
use clap::{Parser, ValueEnum};
use market_common::net::{DEFAULT_PORT, PORT_ENV, addr};
use market_common::{AssetClass, Result};
use std::time::Duration;
use strum::Display;

/// How snapshots reach consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum DeliveryMode {
    /// Timers mutate the dataset and broadcast over `/ws`; REST reads the current snapshot.
    Push,
    /// No timers; every REST request mutates its collection once before answering.
    Pull,
}

/// Parsed server configuration.
#[derive(Debug, Parser)]
#[command(version, about = "Mock market data server", long_about = None)]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port for HTTP and WebSocket traffic.
    #[arg(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Delivery variant.
    #[arg(long, env = "DELIVERY", value_enum, default_value_t = DeliveryMode::Push)]
    pub delivery: DeliveryMode,

    /// Equity update period in milliseconds.
    #[arg(long, default_value_t = default_ms(AssetClass::Stocks))]
    pub stocks_interval_ms: u64,

    /// Index update period in milliseconds.
    #[arg(long, default_value_t = default_ms(AssetClass::Indices))]
    pub indices_interval_ms: u64,

    /// Currency pair update period in milliseconds.
    #[arg(long, default_value_t = default_ms(AssetClass::Currencies))]
    pub currencies_interval_ms: u64,

    /// Crypto update period in milliseconds.
    #[arg(long, default_value_t = default_ms(AssetClass::Cryptos))]
    pub cryptos_interval_ms: u64,

    /// Seed for reproducible price walks; random when unset.
    #[arg(long, env = "MARKET_SEED")]
    pub seed: Option<u64>,
}

fn default_ms(class: AssetClass) -> u64 {
    class.update_interval_ms().unwrap_or_default()
}

impl ServerConfig {
    /// `host:port` to bind.
    pub fn bind_addr(&self) -> String {
        addr(&self.host, self.port)
    }

    /// Validated update periods.
    pub fn intervals(&self) -> Result<Intervals> {
        Intervals {
            stocks: Duration::from_millis(self.stocks_interval_ms),
            indices: Duration::from_millis(self.indices_interval_ms),
            currencies: Duration::from_millis(self.currencies_interval_ms),
            cryptos: Duration::from_millis(self.cryptos_interval_ms),
        }
        .validate()
    }
}

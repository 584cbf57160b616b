//! REST polling consumer.
//!
//! One task per selected asset class fetches `/api/<class>` at the dashboard
//! cadence and keeps a [`FeedState`] for it. Tasks never touch each other: a
//! failing class does not delay or cancel the others.

use crate::model::feed::FeedState;
use crate::model::summary::describe;
use crate::result::Result;
use futures_util::future::join_all;
use log::{error, info, warn};
use market_common::{AssetClass, ServerEvent};
use std::time::Duration;

/// Upper bound for one REST round trip.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch the current snapshot of `class` from `base`.
pub async fn fetch_snapshot(
    client: &reqwest::Client,
    base: &str,
    class: AssetClass,
) -> Result<ServerEvent> {
    let url = format!("{}{}", base.trim_end_matches('/'), class.api_path());
    let response = client.get(&url).send().await?.error_for_status()?;
    let event = match class {
        AssetClass::Stocks => ServerEvent::StocksUpdate(response.json().await?),
        AssetClass::Indices => ServerEvent::IndicesUpdate(response.json().await?),
        AssetClass::Currencies => ServerEvent::CurrenciesUpdate(response.json().await?),
        AssetClass::Cryptos => ServerEvent::CryptosUpdate(response.json().await?),
        AssetClass::News => ServerEvent::NewsUpdate(response.json().await?),
    };
    Ok(event)
}

/// Apply one fetch outcome to `state`, logging the transition.
pub fn record(state: &mut FeedState, class: AssetClass, outcome: Result<ServerEvent>) {
    match outcome {
        Ok(event) => {
            state.on_success(event.len());
            info!("{}", describe(&event));
        }
        Err(e) => {
            state.on_failure(format!("Failed to fetch {} data: {}", class, e));
            if state.has_data() {
                warn!("{}: {}", class, state);
            } else {
                error!("{}: {}", class, state);
            }
        }
    }
}

async fn poll_class(client: reqwest::Client, base: String, class: AssetClass) {
    let mut state = FeedState::Loading;
    let mut ticker = tokio::time::interval(class.poll_interval());
    info!("{}: {}", class, state);
    loop {
        ticker.tick().await;
        let outcome = fetch_snapshot(&client, &base, class).await;
        record(&mut state, class, outcome);
    }
}

/// Poll every class in `classes` until the process is stopped.
pub async fn run(server: &str, classes: &[AssetClass]) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;
    info!("Polling {} for {} classes", server, classes.len());

    let handles = classes.iter().map(|&class| {
        tokio::spawn(poll_class(client.clone(), server.to_string(), class))
    });
    for joined in join_all(handles).await {
        if let Err(e) = joined {
            error!("Poll task stopped: {}", e);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use market_server::broadcaster::Broadcaster;
    use market_server::config::DeliveryMode;
    use market_server::http::router;
    use market_server::model::market::MarketData;
    use market_server::state::AppState;
    use std::net::SocketAddr;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    async fn spawn_server() -> SocketAddr {
        let market = Arc::new(MarketData::seeded(Utc::now()));
        let state = AppState::new(market, Broadcaster::default(), DeliveryMode::Pull, Some(3));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });
        addr
    }

    async fn unused_port() -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    }

    #[tokio::test]
    async fn fetches_every_class() {
        let addr = spawn_server().await;
        let client = reqwest::Client::new();
        let base = format!("http://{}/", addr);

        let mut sizes = Vec::new();
        for class in [
            AssetClass::Stocks,
            AssetClass::Indices,
            AssetClass::Currencies,
            AssetClass::Cryptos,
            AssetClass::News,
        ] {
            let event = fetch_snapshot(&client, &base, class).await.unwrap();
            assert_eq!(event.asset_class(), Some(class));
            sizes.push(event.len());
        }
        assert_eq!(sizes, vec![8, 6, 6, 5, 5]);
    }

    #[tokio::test]
    async fn unreachable_server_fails_first_load() {
        let addr = unused_port().await;
        let client = reqwest::Client::new();
        let mut state = FeedState::Loading;

        let outcome = fetch_snapshot(&client, &format!("http://{}", addr), AssetClass::Stocks).await;
        assert!(outcome.is_err());
        record(&mut state, AssetClass::Stocks, outcome);

        match state {
            FeedState::Failed(msg) => assert!(msg.starts_with("Failed to fetch stocks data")),
            other => panic!("expected failed state, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn later_failure_keeps_last_snapshot() {
        let addr = spawn_server().await;
        let client = reqwest::Client::new();
        let base = format!("http://{}", addr);
        let mut state = FeedState::Loading;

        let ok = fetch_snapshot(&client, &base, AssetClass::Cryptos).await;
        record(&mut state, AssetClass::Cryptos, ok);
        assert_eq!(state, FeedState::Ready { records: 5 });

        let down = unused_port().await;
        let failed = fetch_snapshot(&client, &format!("http://{}", down), AssetClass::Cryptos).await;
        record(&mut state, AssetClass::Cryptos, failed);
        assert!(matches!(state, FeedState::Stale { records: 5, .. }));
    }
}

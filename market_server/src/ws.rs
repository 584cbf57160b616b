//! WebSocket side of the push delivery variant.
//!
//! Each listener gets, in order:
//! 1. one catch-up snapshot per asset class (stocks, indices, currencies,
//!    cryptos, news);
//! 2. every snapshot broadcast by the scheduler afterwards.
//!
//! The listener is subscribed to the broadcaster *before* the catch-up is read,
//! so no tick can fall between the two. Listeners may send
//! `{"event":"subscribe-stock","data":"<SYMBOL>"}` and get back a single
//! `stock-update` (or an `error` frame) on the same socket.

use crate::model::market::MarketData;
use crate::state::AppState;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use log::{debug, info, warn};
use market_common::api::{ErrorResponse, STOCK_NOT_FOUND};
use market_common::{ClientRequest, MarketError, Result, ServerEvent};
use tokio::sync::broadcast::error::RecvError;

/// Upgrade `GET /ws` into a push listener.
pub async fn upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| async move {
        if let Err(e) = serve_listener(socket, state).await {
            warn!("Listener closed with error: {}", e);
        }
    })
}

async fn send(sink: &mut SplitSink<WebSocket, Message>, event: &ServerEvent) -> Result<()> {
    sink.send(Message::Text(event.to_json()?))
        .await
        .map_err(|e| MarketError::ChannelSend(e.to_string()))
}

async fn serve_listener(socket: WebSocket, state: AppState) -> Result<()> {
    let mut updates = state.broadcaster.subscribe();
    let (mut sink, mut stream) = socket.split();
    info!(
        "Listener connected ({} active)",
        state.broadcaster.listener_count()
    );

    for event in state.market.catch_up()? {
        send(&mut sink, &event).await?;
    }

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(event) => send(&mut sink, &event).await?,
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Listener lagged, skipped {} snapshots", skipped);
                }
                Err(RecvError::Closed) => break,
            },
            incoming = stream.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    let reply = answer(&state.market, &text);
                    send(&mut sink, &reply).await?;
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    debug!("Listener socket error: {}", e);
                    break;
                }
            },
        }
    }

    info!("Listener disconnected");
    Ok(())
}

/// Reply to one inbound frame.
pub fn answer(market: &MarketData, text: &str) -> ServerEvent {
    match serde_json::from_str::<ClientRequest>(text) {
        Ok(ClientRequest::SubscribeStock(symbol)) => lookup_stock(market, &symbol),
        Err(e) => ServerEvent::Error(ErrorResponse::new(format!("Unrecognised request: {}", e))),
    }
}

fn lookup_stock(market: &MarketData, symbol: &str) -> ServerEvent {
    match market.stock(symbol) {
        Ok(stock) => ServerEvent::StockUpdate(stock),
        Err(MarketError::SymbolNotFound(_)) => {
            ServerEvent::Error(ErrorResponse::new(STOCK_NOT_FOUND))
        }
        Err(e) => ServerEvent::Error(ErrorResponse::new(e.to_string())),
    }
}

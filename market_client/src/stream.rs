//! WebSocket push consumer.

use crate::model::summary::describe;
use crate::result::Result;
use futures_util::{SinkExt, StreamExt};
use log::{info, warn};
use market_common::net::ws_url;
use market_common::{ClientRequest, ServerEvent};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// Decode one text frame from the server.
pub fn parse_frame(text: &str) -> Result<ServerEvent> {
    Ok(serde_json::from_str(text)?)
}

/// Connect to the push channel of `server` and log every event until the
/// server closes the connection.
pub async fn run(server: &str, subscribe: Option<&str>) -> Result<()> {
    let url = ws_url(server);
    info!("Connecting to {}", url);
    let (socket, _) = connect_async(url.as_str()).await?;
    let (mut sink, mut frames) = socket.split();
    info!("Connected to {}", url);

    if let Some(symbol) = subscribe {
        let request = serde_json::to_string(&ClientRequest::SubscribeStock(symbol.to_string()))?;
        sink.send(Message::Text(request)).await?;
    }

    while let Some(frame) = frames.next().await {
        match frame? {
            Message::Text(text) => match parse_frame(&text) {
                Ok(event) => info!("{}", describe(&event)),
                Err(e) => warn!("Skipping unreadable frame: {}", e),
            },
            Message::Close(_) => break,
            _ => {}
        }
    }
    info!("Server closed the push channel");
    Ok(())
}

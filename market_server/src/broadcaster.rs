//! Push fan-out of snapshot events to every connected listener.
//!
//! Listeners register by calling [`Broadcaster::subscribe`] and receive every
//! event published afterwards, in publish order. Publishing with no listener
//! connected is not an error: the event is simply dropped. A listener that
//! falls more than the channel capacity behind skips the oldest events; since
//! every event is a full snapshot it recovers on the next one.

use market_common::ServerEvent;
use tokio::sync::broadcast;

/// Number of events buffered per listener before it starts lagging.
pub const BROADCAST_CAPACITY: usize = 64;

/// Cloneable handle to the push channel.
#[derive(Clone)]
pub struct Broadcaster {
    tx: broadcast::Sender<ServerEvent>,
}

impl Broadcaster {
    /// Create a channel buffering `capacity` events per listener.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Register a new listener.
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.tx.subscribe()
    }

    /// Send `event` to every listener; returns how many received it.
    pub fn publish(&self, event: ServerEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Number of currently connected listeners.
    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new(BROADCAST_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_without_listeners_is_dropped() {
        let broadcaster = Broadcaster::default();
        assert_eq!(broadcaster.publish(ServerEvent::NewsUpdate(Vec::new())), 0);
    }

    #[tokio::test]
    async fn every_listener_receives_events_in_order() {
        let broadcaster = Broadcaster::default();
        let mut first = broadcaster.subscribe();
        let mut second = broadcaster.subscribe();
        assert_eq!(broadcaster.listener_count(), 2);

        broadcaster.publish(ServerEvent::StocksUpdate(Vec::new()));
        broadcaster.publish(ServerEvent::CryptosUpdate(Vec::new()));

        for rx in [&mut first, &mut second] {
            assert_eq!(rx.recv().await.unwrap().name(), "stocks-update");
            assert_eq!(rx.recv().await.unwrap().name(), "cryptos-update");
        }
    }

    #[tokio::test]
    async fn dropped_listener_is_no_longer_counted() {
        let broadcaster = Broadcaster::default();
        let rx = broadcaster.subscribe();
        assert_eq!(broadcaster.listener_count(), 1);
        drop(rx);
        assert_eq!(broadcaster.listener_count(), 0);
    }

    #[tokio::test]
    async fn lagging_listener_skips_to_newer_snapshots() {
        let broadcaster = Broadcaster::new(2);
        let mut rx = broadcaster.subscribe();
        for _ in 0..3 {
            broadcaster.publish(ServerEvent::IndicesUpdate(Vec::new()));
        }
        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Lagged(1))
        ));
        assert!(rx.recv().await.is_ok());
    }
}

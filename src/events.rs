use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

/// Events emitted by the cart and order engines. Consumed by a logging task
/// today; the channel is the seam for future webhook or analytics fanout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    CartItemAdded {
        session_id: String,
        material_id: i64,
        is_group: bool,
    },
    CartItemUpdated {
        session_id: String,
        item_id: i64,
    },
    CartItemRemoved {
        session_id: String,
        item_id: i64,
    },
    CartCleared {
        session_id: String,
    },
    OrderCreated {
        order_id: Uuid,
        session_id: String,
    },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event, logging instead of failing if the consumer is gone.
    /// Event delivery is best-effort and never fails the originating
    /// operation.
    pub async fn send_or_log(&self, event: Event) {
        if let Err(err) = self.sender.send(event).await {
            warn!("failed to publish event: {}", err);
        }
    }
}

/// Builds a connected sender/receiver pair with a bounded buffer.
pub fn channel(buffer: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(buffer);
    (EventSender::new(tx), rx)
}

/// Drains the event channel, logging each event. Runs until all senders are
/// dropped.
pub async fn process_events(mut receiver: mpsc::Receiver<Event>) {
    while let Some(event) = receiver.recv().await {
        info!(?event, "event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_or_log_delivers_to_receiver() {
        let (sender, mut rx) = channel(8);
        sender
            .send_or_log(Event::CartCleared {
                session_id: "sess-1".into(),
            })
            .await;

        match rx.recv().await {
            Some(Event::CartCleared { session_id }) => assert_eq!(session_id, "sess-1"),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_or_log_survives_dropped_receiver() {
        let (sender, rx) = channel(1);
        drop(rx);
        // Must not panic or error out.
        sender
            .send_or_log(Event::CartItemRemoved {
                session_id: "sess-1".into(),
                item_id: 1,
            })
            .await;
    }
}

use tokio::sync::{RwLock, mpsc};
use tracing::debug;
use uuid::Uuid;

use super::protocol::DashboardEvent;

/// A handle to deliver events to one subscriber.
#[derive(Debug, Clone)]
struct SubscriberHandle {
    id: Uuid,
    sender: mpsc::UnboundedSender<DashboardEvent>,
}

/// Receiving end of a subscription. Dropping it unsubscribes lazily: the
/// next publish notices the closed channel and forgets the handle.
pub struct Subscription {
    pub id: Uuid,
    pub receiver: mpsc::UnboundedReceiver<DashboardEvent>,
}

impl Subscription {
    pub async fn recv(&mut self) -> Option<DashboardEvent> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Option<DashboardEvent> {
        self.receiver.try_recv().ok()
    }
}

/// In-process publish/subscribe channel between dashboard panels.
///
/// Every subscriber gets its own id, so two panels listening for the same
/// event never overwrite each other.
#[derive(Default)]
pub struct EventBus {
    subscribers: RwLock<Vec<SubscriberHandle>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn subscribe(&self) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();
        let id = Uuid::new_v4();

        self.subscribers
            .write()
            .await
            .push(SubscriberHandle { id, sender: tx });

        Subscription { id, receiver: rx }
    }

    pub async fn unsubscribe(&self, id: Uuid) {
        self.subscribers.write().await.retain(|s| s.id != id);
    }

    /// Deliver `event` to every live subscriber and return how many got it.
    pub async fn publish(&self, event: DashboardEvent) -> usize {
        let mut subscribers = self.subscribers.write().await;
        // A failed send means the receiver was dropped.
        subscribers.retain(|s| s.sender.send(event.clone()).is_ok());
        debug!(delivered = subscribers.len(), "Dashboard event published");
        subscribers.len()
    }

    pub async fn subscriber_count(&self) -> usize {
        self.subscribers.read().await.len()
    }
}

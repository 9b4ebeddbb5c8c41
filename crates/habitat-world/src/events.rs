//! Publish-only notification channel for world-level events.

use habitat_core::EventBusConfig;
use tokio::sync::broadcast;
use tracing::trace;

pub use tokio::sync::broadcast::error::{RecvError, TryRecvError};
pub use tokio::sync::broadcast::Receiver;

/// Largest per-subscriber backlog a bus will buffer
pub const MAX_CAPACITY: usize = 1 << 16;

/// Fan-out channel shared between a world and whoever listens to it.
///
/// Cloning the handle shares the underlying channel. Publishing never waits:
/// a subscriber that falls `capacity` events behind loses the oldest ones and
/// observes [`RecvError::Lagged`] on its next receive.
///
/// Requested capacities are clamped to `1..=MAX_CAPACITY`.
#[derive(Debug, Clone)]
pub struct EventBus<E> {
    sender: broadcast::Sender<E>,
}

impl<E: Clone> EventBus<E> {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.clamp(1, MAX_CAPACITY));
        Self { sender }
    }

    pub fn from_config(config: &EventBusConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Deliver `event` to every current subscriber.
    ///
    /// Returns how many subscribers were reached; zero is not an error.
    pub fn publish(&self, event: E) -> usize {
        let delivered = self.sender.send(event).unwrap_or(0);
        trace!(delivered, "Published world event");
        delivered
    }

    pub fn subscribe(&self) -> Receiver<E> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl<E: Clone> Default for EventBus<E> {
    fn default() -> Self {
        Self::from_config(&EventBusConfig::default())
    }
}

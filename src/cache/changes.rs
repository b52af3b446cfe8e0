//! Expiration-change notifications.
//!
//! Every accepted reconfiguration is published to each live subscriber in
//! emission order. Completing the channel drops every sender, which ends
//! each subscription stream exactly once.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use super::CacheExpirationOptions;
use crate::models::ResourceType;

/// A change of expiration policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationChange {
    /// Kind whose policy changed, or `None` for the default policy.
    pub resource: Option<ResourceType>,
    /// Options now in effect.
    pub options: CacheExpirationOptions,
}

#[derive(Debug, Default)]
struct Subscribers {
    senders: Vec<UnboundedSender<ExpirationChange>>,
    completed: bool,
}

/// Publisher side of the change stream.
#[derive(Debug, Default)]
pub(crate) struct ChangeChannel {
    subscribers: Mutex<Subscribers>,
}

impl ChangeChannel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Subscribe to changes published from now on.
    ///
    /// After completion the returned stream is already finished.
    pub(crate) fn subscribe(&self) -> ExpirationChanges {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut subscribers = self.subscribers.lock();
        if !subscribers.completed {
            subscribers.senders.push(tx);
        }
        ExpirationChanges { rx }
    }

    /// Deliver `change` to every live subscriber.
    ///
    /// Held under the lock so concurrent publishes are never reordered.
    pub(crate) fn publish(&self, change: ExpirationChange) {
        let mut subscribers = self.subscribers.lock();
        if subscribers.completed {
            return;
        }
        subscribers.senders.retain(|tx| tx.send(change).is_ok());
        debug!(
            "Published expiration change for {:?} to {} subscriber(s)",
            change.resource.map(|r| r.endpoint()),
            subscribers.senders.len()
        );
    }

    /// Complete every subscription. Returns `false` if already completed.
    pub(crate) fn complete(&self) -> bool {
        let mut subscribers = self.subscribers.lock();
        if subscribers.completed {
            return false;
        }
        subscribers.completed = true;
        let count = subscribers.senders.len();
        subscribers.senders.clear();
        debug!("Completed expiration change stream ({} subscriber(s))", count);
        true
    }

    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.lock().senders.len()
    }
}

/// Subscription to expiration changes.
///
/// Yields each change once, then `None` after the manager is disposed.
#[derive(Debug)]
pub struct ExpirationChanges {
    rx: UnboundedReceiver<ExpirationChange>,
}

impl ExpirationChanges {
    /// Wait for the next change. `None` means the stream completed.
    pub async fn recv(&mut self) -> Option<ExpirationChange> {
        self.rx.recv().await
    }

    /// Non-blocking poll.
    ///
    /// `Err(TryRecvError::Empty)` means no change is pending;
    /// `Err(TryRecvError::Disconnected)` means the stream completed.
    pub fn try_recv(&mut self) -> Result<ExpirationChange, TryRecvError> {
        self.rx.try_recv()
    }
}

impl Stream for ExpirationChanges {
    type Item = ExpirationChange;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

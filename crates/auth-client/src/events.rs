use futures_channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use shared_types::{AuthChangeEvent, AuthStateChange, Session};
use std::sync::{Arc, Mutex, Weak};

/// Registered auth-state listeners, keyed by a monotonically increasing id.
#[derive(Default)]
struct Registry {
    next_id: u64,
    senders: Vec<(u64, UnboundedSender<AuthStateChange>)>,
}

/// Shared set of auth-state subscribers. Cloning shares the same registry,
/// so the client stays cheaply clonable into event handlers.
#[derive(Clone, Default)]
pub(crate) struct ListenerSet {
    inner: Arc<Mutex<Registry>>,
}

impl ListenerSet {
    /// Register a new subscriber and hand back its handle. When `initial` is
    /// given (a session already exists) it is queued for this subscriber
    /// alone, before anything else is delivered.
    pub(crate) fn subscribe(&self, initial: Option<AuthStateChange>) -> AuthSubscription {
        let (tx, rx) = mpsc::unbounded();
        if let Some(change) = initial {
            let _ = tx.unbounded_send(change);
        }
        let id = match self.inner.lock() {
            Ok(mut registry) => {
                registry.next_id += 1;
                let id = registry.next_id;
                registry.senders.push((id, tx));
                id
            }
            Err(_) => 0,
        };
        AuthSubscription {
            id,
            registry: Arc::downgrade(&self.inner),
            receiver: Some(rx),
        }
    }

    /// Deliver a change to every live subscriber, pruning any whose receiver
    /// is gone.
    pub(crate) fn emit(&self, event: AuthChangeEvent, session: Option<Session>) {
        let change = AuthStateChange { event, session };
        if let Ok(mut registry) = self.inner.lock() {
            registry
                .senders
                .retain(|(_, tx)| tx.unbounded_send(change.clone()).is_ok());
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.inner.lock().map(|r| r.senders.len()).unwrap_or(0)
    }
}

/// A live auth-state subscription.
///
/// Holds the receiving end of the change stream and deregisters itself on
/// [`unsubscribe`](Self::unsubscribe) or drop — whichever comes first — so a
/// component releases its listener exactly once per mount.
pub struct AuthSubscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
    receiver: Option<UnboundedReceiver<AuthStateChange>>,
}

impl AuthSubscription {
    /// Take the change stream out of the handle. Returns `None` after the
    /// first call; the handle itself keeps working as the unsubscribe guard.
    pub fn take_stream(&mut self) -> Option<UnboundedReceiver<AuthStateChange>> {
        self.receiver.take()
    }

    /// Remove this subscriber from the registry. Idempotent.
    pub fn unsubscribe(&self) {
        if let Some(inner) = self.registry.upgrade() {
            if let Ok(mut registry) = inner.lock() {
                registry.senders.retain(|(id, _)| *id != self.id);
            }
        }
    }
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

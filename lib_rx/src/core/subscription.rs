//! # Subscription
//!
//! The cancellation handle for one live producer-to-observer link. A
//! `Subscription` is a cheap, cloneable reference to shared state; every clone
//! controls the same link.
//!
//! ## Teardown chaining
//! Resources are released through registered [`Teardown`]s. An operator chains
//! its upstream `Subscription` as a teardown of its downstream one, so that
//! cancelling the outermost handle walks the chain down to the source before
//! `unsubscribe` returns.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Lifecycle of a [`Subscription`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionState {
    /// Production may still deliver notifications.
    Active,
    /// Cancelled or terminated; nothing more is delivered.
    Unsubscribed,
}

/// Cleanup run exactly once when a subscription leaves `Active`.
pub enum Teardown {
    /// Nothing to release.
    Empty,
    /// An arbitrary cleanup closure (cancel a timer, close a handle).
    Callback(Box<dyn FnOnce() + Send>),
    /// Another subscription to cancel, typically the upstream link.
    Subscription(Subscription),
}

impl Teardown {
    /// A teardown that releases nothing.
    pub fn empty() -> Self {
        Teardown::Empty
    }

    /// Wraps a cleanup closure.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Teardown::Callback(Box::new(f))
    }

    fn execute(self) {
        match self {
            Teardown::Empty => {}
            Teardown::Callback(f) => f(),
            Teardown::Subscription(sub) => sub.unsubscribe(),
        }
    }
}

impl From<()> for Teardown {
    fn from(_: ()) -> Self {
        Teardown::Empty
    }
}

impl From<Subscription> for Teardown {
    fn from(sub: Subscription) -> Self {
        Teardown::Subscription(sub)
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Teardown::Empty => f.write_str("Teardown::Empty"),
            Teardown::Callback(_) => f.write_str("Teardown::Callback"),
            Teardown::Subscription(sub) => f.debug_tuple("Teardown::Subscription").field(sub).finish(),
        }
    }
}

struct Inner {
    closed: AtomicBool,
    teardowns: Mutex<Vec<Teardown>>,
}

/// # Subscription
///
/// Handle returned by `Observable::subscribe`. Unsubscribing is idempotent and
/// safe to call from any thread, any number of times.
#[derive(Clone)]
pub struct Subscription {
    inner: Arc<Inner>,
}

impl Subscription {
    /// Creates an `Active` subscription with no teardowns.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                closed: AtomicBool::new(false),
                teardowns: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SubscriptionState {
        if self.is_closed() {
            SubscriptionState::Unsubscribed
        } else {
            SubscriptionState::Active
        }
    }

    /// `true` once unsubscribed, whether by cancellation or termination.
    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    /// Registers cleanup for this subscription.
    ///
    /// If the subscription is already closed the teardown runs immediately on
    /// the calling thread.
    pub fn add(&self, teardown: impl Into<Teardown>) {
        let teardown = teardown.into();
        if let Teardown::Empty = teardown {
            return;
        }

        let rejected = {
            let mut list = self.inner.teardowns.lock().unwrap_or_else(PoisonError::into_inner);
            if self.is_closed() {
                Some(teardown)
            } else {
                list.push(teardown);
                None
            }
        };

        if let Some(teardown) = rejected {
            teardown.execute();
        }
    }

    /// Cancels the link and releases every registered resource.
    ///
    /// Only the first call does any work. Teardowns run synchronously, in
    /// registration order, outside of the internal lock.
    pub fn unsubscribe(&self) {
        if self.inner.closed.swap(true, Ordering::AcqRel) {
            return;
        }

        let teardowns = {
            let mut list = self.inner.teardowns.lock().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *list)
        };

        log::debug!("Subscription closed; running {} teardown(s)", teardowns.len());
        for teardown in teardowns {
            teardown.execute();
        }
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("state", &self.state()).finish()
    }
}

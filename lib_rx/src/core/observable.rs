//! # Observable
//!
//! An immutable, replayable description of how to produce a sequence. Nothing
//! runs until `subscribe`; every call starts a fresh, independent production
//! (cold semantics) with its own per-subscription state.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::core::notification::Notification;
use crate::core::observer::Observer;
use crate::core::subscriber::Subscriber;
use crate::core::subscription::{Subscription, Teardown};
use crate::observers::ChannelObserver;

type Producer<T> = dyn Fn(Subscriber<T>) -> Teardown + Send + Sync;

/// # Observable
///
/// A producer function shared behind an `Arc`. Cloning is cheap and clones
/// describe the same sequence.
pub struct Observable<T> {
    producer: Arc<Producer<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Arc::clone(&self.producer),
        }
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Creates an observable from a producer function.
    ///
    /// The producer receives a [`Subscriber`] and returns whatever cleanup the
    /// production needs: `()`, a [`Subscription`], or a [`Teardown`]. It runs
    /// once per `subscribe`. Synchronous producers may emit everything before
    /// returning; asynchronous ones schedule work and return immediately.
    pub fn new<F, R>(producer: F) -> Self
    where
        F: Fn(Subscriber<T>) -> R + Send + Sync + 'static,
        R: Into<Teardown>,
    {
        Self {
            producer: Arc::new(move |subscriber: Subscriber<T>| -> Teardown { producer(subscriber).into() }),
        }
    }

    /// Attaches `observer` and starts production.
    ///
    /// The returned handle is valid for cancellation even when a synchronous
    /// source has already run to completion inside this call.
    pub fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<T>,
    {
        self.subscribe_with(observer, Subscription::new())
    }

    /// Attaches `observer` under a caller-supplied subscription.
    ///
    /// Operators use this to hold the upstream handle before the source starts
    /// emitting, so they can cancel it from inside a synchronous emission.
    pub fn subscribe_with<O>(&self, observer: O, subscription: Subscription) -> Subscription
    where
        O: Observer<T>,
    {
        let subscriber = Subscriber::new(Box::new(observer), subscription.clone());
        log::debug!("Subscribing observer");
        let teardown = (self.producer)(subscriber);
        subscription.add(teardown);
        subscription
    }

    /// Derives a new observable by wrapping each downstream subscriber in an
    /// intermediate observer subscribed to `self`.
    ///
    /// `make` receives the downstream subscriber and the upstream subscription.
    /// The upstream handle is chained as a teardown of the downstream one before
    /// the source starts, so cancelling downstream always cancels upstream and
    /// the intermediate observer can cancel upstream from inside an emission.
    pub fn lift<B, O, F>(self, make: F) -> Observable<B>
    where
        B: Send + 'static,
        O: Observer<T>,
        F: Fn(Subscriber<B>, Subscription) -> O + Send + Sync + 'static,
    {
        Observable::new(move |downstream: Subscriber<B>| {
            let upstream = Subscription::new();
            downstream.subscription().add(upstream.clone());
            let observer = make(downstream, upstream.clone());
            self.subscribe_with(observer, upstream);
        })
    }

    /// Subscribes a channel-backed observer and returns the receiving half.
    ///
    /// The channel closes after the terminal notification, or when the
    /// subscription is cancelled.
    pub fn subscribe_channel(&self) -> (Subscription, mpsc::UnboundedReceiver<Notification<T>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = self.subscribe(ChannelObserver::new(tx));
        (subscription, rx)
    }
}

impl<T> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Observable { .. }")
    }
}

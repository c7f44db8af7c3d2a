//! # Subscriber
//!
//! The engine-side guard that sits between a producer and the observer it
//! feeds. Every producer function receives a `Subscriber`, never the raw
//! observer, so the notification grammar is enforced in one place:
//!
//! - **Serialized delivery**: the observer lives behind a single delivery lock.
//!   Two threads emitting into the same subscriber take turns; no two
//!   callbacks on one observer ever overlap.
//! - **Cancellation**: once the subscription is closed, emissions are dropped
//!   and the observer is released.
//! - **Auto-unsubscribe**: `error`/`complete` deliver, release the observer,
//!   then close the subscription, which cancels everything chained upstream.
//! - **Protocol violations**: a notification after a terminal one is a
//!   producer bug. It is logged at error level, asserted in debug builds, and
//!   never delivered.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, TryLockError};

use crate::core::error::RxError;
use crate::core::observer::Observer;
use crate::core::subscription::{Subscription, Teardown};

struct Slot<T> {
    observer: Option<Box<dyn Observer<T>>>,
    terminated: bool,
}

/// Producer-facing handle that delivers notifications to one observer.
pub struct Subscriber<T> {
    slot: Arc<Mutex<Slot<T>>>,
    subscription: Subscription,
}

impl<T> Clone for Subscriber<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
            subscription: self.subscription.clone(),
        }
    }
}

impl<T: Send + 'static> Subscriber<T> {
    /// Wraps `observer` and ties its lifetime to `subscription`.
    pub fn new(observer: Box<dyn Observer<T>>, subscription: Subscription) -> Self {
        let slot = Arc::new(Mutex::new(Slot {
            observer: Some(observer),
            terminated: false,
        }));

        // Release the observer on cancellation. If a delivery holds the slot,
        // `try_lock` fails and that delivery releases it after unlocking.
        let release = Arc::clone(&slot);
        subscription.add(Teardown::from_fn(move || release_observer(&release)));

        Self { slot, subscription }
    }

    /// The subscription this subscriber delivers under.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    /// `true` once the consumer cancelled or the stream terminated.
    /// Producers poll this to stop early.
    pub fn is_closed(&self) -> bool {
        self.subscription.is_closed()
    }

    /// Delivers a value.
    pub fn next(&self, value: T) {
        {
            let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
            if slot.terminated {
                protocol_violation("Next");
                return;
            }
            if !self.subscription.is_closed() {
                if let Some(observer) = slot.observer.as_mut() {
                    observer.on_next(value);
                }
            }
        }
        // `closed` is set before teardowns run, so a cancel that found the slot
        // locked is always visible here.
        if self.subscription.is_closed() {
            release_observer(&self.slot);
        }
    }

    /// Delivers the terminal error and unsubscribes.
    pub fn error(&self, err: RxError) {
        if self.terminate("Error", |observer| observer.on_error(err)) {
            self.subscription.unsubscribe();
        }
    }

    /// Delivers the terminal completion and unsubscribes.
    pub fn complete(&self) {
        if self.terminate("Complete", |observer| observer.on_complete()) {
            self.subscription.unsubscribe();
        }
    }

    fn terminate<F>(&self, kind: &str, deliver: F) -> bool
    where
        F: FnOnce(&mut dyn Observer<T>),
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.terminated {
            protocol_violation(kind);
            return false;
        }
        if self.subscription.is_closed() {
            slot.observer = None;
            return false;
        }
        slot.terminated = true;
        if let Some(mut observer) = slot.observer.take() {
            log::debug!("Delivering terminal {} notification", kind);
            deliver(observer.as_mut());
        }
        true
    }
}

impl<T> fmt::Debug for Subscriber<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriber").field("subscription", &self.subscription).finish()
    }
}

fn release_observer<T>(slot: &Mutex<Slot<T>>) {
    let released = match slot.try_lock() {
        Ok(mut slot) => slot.observer.take(),
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().observer.take(),
        Err(TryLockError::WouldBlock) => None,
    };
    drop(released);
}

fn protocol_violation(kind: &str) {
    log::error!("Protocol violation: {} delivered after a terminal notification", kind);
    debug_assert!(false, "protocol violation: {} after a terminal notification", kind);
}

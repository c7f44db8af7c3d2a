//! # Collector
//!
//! Records every notification it receives. Clones share the same record, so a
//! test keeps one clone and moves the other into `subscribe`.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::Notify;

use crate::core::{Notification, Observer, RxError};

struct Record<T> {
    notifications: Mutex<Vec<Notification<T>>>,
    terminated: Notify,
}

/// Shared, cloneable notification recorder.
pub struct Collector<T> {
    record: Arc<Record<T>>,
}

impl<T> Clone for Collector<T> {
    fn clone(&self) -> Self {
        Self {
            record: Arc::clone(&self.record),
        }
    }
}

impl<T> Default for Collector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collector<T> {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            record: Arc::new(Record {
                notifications: Mutex::new(Vec::new()),
                terminated: Notify::new(),
            }),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&Vec<Notification<T>>) -> R) -> R {
        let guard = self.record.notifications.lock().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn push(&self, notification: Notification<T>) {
        let terminal = notification.is_terminal();
        self.record
            .notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
        if terminal {
            self.record.terminated.notify_waiters();
        }
    }

    /// Number of notifications received so far.
    pub fn len(&self) -> usize {
        self.with(Vec::len)
    }

    /// `true` if nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` once a `Complete` was recorded.
    pub fn is_completed(&self) -> bool {
        self.with(|n| n.iter().any(|n| matches!(n, Notification::Complete)))
    }

    /// `true` once an `Error` was recorded.
    pub fn is_errored(&self) -> bool {
        self.with(|n| n.iter().any(|n| matches!(n, Notification::Error(_))))
    }

    /// `true` once any terminal notification was recorded.
    pub fn is_terminated(&self) -> bool {
        self.with(|n| n.iter().any(Notification::is_terminal))
    }

    /// The recorded error, if the stream failed.
    pub fn error(&self) -> Option<RxError> {
        self.with(|n| {
            n.iter().find_map(|n| match n {
                Notification::Error(err) => Some(err.clone()),
                _ => None,
            })
        })
    }

    /// `true` if the record so far matches `Next* (Error | Complete)?`.
    pub fn is_well_formed(&self) -> bool {
        self.with(|n| crate::core::is_well_formed(n))
    }

    /// Resolves once a terminal notification has been recorded.
    pub async fn terminated(&self) {
        loop {
            let notified = self.record.terminated.notified();
            if self.is_terminated() {
                return;
            }
            notified.await;
        }
    }
}

impl<T: Clone> Collector<T> {
    /// Snapshot of every notification, in arrival order.
    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.with(|n| n.clone())
    }

    /// Snapshot of the values only.
    pub fn values(&self) -> Vec<T> {
        self.with(|n| n.iter().filter_map(|n| n.clone().into_value()).collect())
    }
}

impl<T: Send + 'static> Observer<T> for Collector<T> {
    fn on_next(&mut self, value: T) {
        self.push(Notification::Next(value));
    }

    fn on_error(&mut self, err: RxError) {
        self.push(Notification::Error(err));
    }

    fn on_complete(&mut self) {
        self.push(Notification::Complete);
    }
}

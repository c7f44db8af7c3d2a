//! Bridges a stream into a tokio channel for async consumers.

use tokio::sync::mpsc;

use crate::core::{Notification, Observer, RxError};

/// Forwards notifications into an unbounded mpsc channel.
///
/// The sender is dropped with the observer, so the receiver sees the channel
/// close after the terminal notification or after cancellation.
pub struct ChannelObserver<T> {
    tx: mpsc::UnboundedSender<Notification<T>>,
}

impl<T> ChannelObserver<T> {
    /// Wraps the sending half of a channel.
    pub fn new(tx: mpsc::UnboundedSender<Notification<T>>) -> Self {
        Self { tx }
    }

    fn send(&self, notification: Notification<T>) {
        if self.tx.send(notification).is_err() {
            log::trace!("Channel receiver dropped; notification discarded");
        }
    }
}

impl<T: Send + 'static> Observer<T> for ChannelObserver<T> {
    fn on_next(&mut self, value: T) {
        self.send(Notification::Next(value));
    }

    fn on_error(&mut self, err: RxError) {
        self.send(Notification::Error(err));
    }

    fn on_complete(&mut self) {
        self.send(Notification::Complete);
    }
}

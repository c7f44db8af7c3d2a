//! # Notification
//!
//! The three-case message flowing from a producer to an observer. A well-formed
//! stream matches the grammar `Next* (Error | Complete)?`.

use crate::core::error::RxError;
use crate::core::observer::Observer;

/// One message in a stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification<T> {
    /// A value.
    Next(T),
    /// Terminal failure.
    Error(RxError),
    /// Terminal success.
    Complete,
}

impl<T> Notification<T> {
    /// `true` for `Error` and `Complete`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Notification::Next(_))
    }

    /// Dispatches this notification to the matching observer callback.
    pub fn accept(self, observer: &mut dyn Observer<T>)
    where
        T: 'static,
    {
        match self {
            Notification::Next(value) => observer.on_next(value),
            Notification::Error(err) => observer.on_error(err),
            Notification::Complete => observer.on_complete(),
        }
    }

    /// The carried value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Notification::Next(value) => Some(value),
            _ => None,
        }
    }
}

/// Checks a recorded sequence against `Next* (Error | Complete)?`.
///
/// Returns `false` as soon as anything follows a terminal notification.
pub fn is_well_formed<T>(notifications: &[Notification<T>]) -> bool {
    match notifications.iter().position(Notification::is_terminal) {
        Some(idx) => idx == notifications.len() - 1,
        None => true,
    }
}

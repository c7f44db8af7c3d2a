//! # Observer
//!
//! The consumer side of the contract. Observers are moved into `subscribe` and
//! may be called from a background task, hence the `Send + 'static` bound.

use crate::core::error::RxError;

/// The three-capability sink for one observable's notifications.
pub trait Observer<T>: Send + 'static {
    /// Receives a value.
    fn on_next(&mut self, value: T);
    /// Receives the terminal error. Nothing follows it.
    fn on_error(&mut self, err: RxError);
    /// Receives the terminal completion. Nothing follows it.
    fn on_complete(&mut self);
}

impl<T, O> Observer<T> for Box<O>
where
    O: Observer<T> + ?Sized,
{
    fn on_next(&mut self, value: T) {
        (**self).on_next(value)
    }

    fn on_error(&mut self, err: RxError) {
        (**self).on_error(err)
    }

    fn on_complete(&mut self) {
        (**self).on_complete()
    }
}

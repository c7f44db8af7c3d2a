//! Closure-backed and no-op observers.

use std::marker::PhantomData;

use crate::core::{Observer, RxError};

/// # Callback Observer
///
/// Adapts three closures to the [`Observer`] capability set.
pub struct CallbackObserver<N, E, C> {
    on_next: N,
    on_error: E,
    on_complete: C,
}

impl<N, E, C> CallbackObserver<N, E, C> {
    /// Builds an observer from the three callbacks.
    pub fn new(on_next: N, on_error: E, on_complete: C) -> Self {
        Self {
            on_next,
            on_error,
            on_complete,
        }
    }
}

/// Shorthand for [`CallbackObserver::new`].
pub fn observer_fn<T, N, E, C>(on_next: N, on_error: E, on_complete: C) -> CallbackObserver<N, E, C>
where
    N: FnMut(T) + Send + 'static,
    E: FnMut(RxError) + Send + 'static,
    C: FnMut() + Send + 'static,
{
    CallbackObserver::new(on_next, on_error, on_complete)
}

impl<T, N, E, C> Observer<T> for CallbackObserver<N, E, C>
where
    N: FnMut(T) + Send + 'static,
    E: FnMut(RxError) + Send + 'static,
    C: FnMut() + Send + 'static,
{
    fn on_next(&mut self, value: T) {
        (self.on_next)(value)
    }

    fn on_error(&mut self, err: RxError) {
        (self.on_error)(err)
    }

    fn on_complete(&mut self) {
        (self.on_complete)()
    }
}

/// Ignores every notification.
pub struct NoopObserver<T> {
    _marker: PhantomData<fn(T)>,
}

impl<T> NoopObserver<T> {
    /// Creates the observer.
    pub fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<T> Default for NoopObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Observer<T> for NoopObserver<T> {
    fn on_next(&mut self, _value: T) {}

    fn on_error(&mut self, _err: RxError) {}

    fn on_complete(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creation::{of, throw};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_callbacks_receive_each_kind() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let (next_log, error_log, complete_log) = (Arc::clone(&log), Arc::clone(&log), Arc::clone(&log));

        of(vec![1, 2]).subscribe(observer_fn(
            move |v: i32| next_log.lock().unwrap().push(format!("next {}", v)),
            move |e| error_log.lock().unwrap().push(format!("error {}", e)),
            move || complete_log.lock().unwrap().push("complete".to_string()),
        ));
        throw::<i32>(RxError::producer("x")).subscribe(CallbackObserver::new(
            |_v: i32| {},
            {
                let log = Arc::clone(&log);
                move |e: RxError| log.lock().unwrap().push(format!("error {}", e.message()))
            },
            || {},
        ));

        assert_eq!(*log.lock().unwrap(), vec!["next 1", "next 2", "complete", "error x"]);
    }

    #[test]
    fn test_noop_accepts_everything() {
        let subscription = of(vec![1, 2, 3]).subscribe(NoopObserver::new());
        assert!(subscription.is_closed());
    }
}

//! Terminal-only sources.

use crate::core::{Observable, RxError, Subscriber};

/// Completes immediately without emitting a value.
pub fn empty<T: Send + 'static>() -> Observable<T> {
    Observable::new(|subscriber: Subscriber<T>| subscriber.complete())
}

/// Emits nothing and never terminates. Only cancellation ends it.
pub fn never<T: Send + 'static>() -> Observable<T> {
    Observable::new(|_subscriber: Subscriber<T>| ())
}

/// Fails immediately with `err`; no values, no completion.
///
/// The error is replayed to every subscriber.
pub fn throw<T: Send + 'static>(err: RxError) -> Observable<T> {
    Observable::new(move |subscriber: Subscriber<T>| subscriber.error(err.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Notification;
    use crate::observers::Collector;

    #[test]
    fn test_empty_completes() {
        let collector = Collector::<i32>::new();
        let subscription = empty().subscribe(collector.clone());
        assert_eq!(collector.notifications(), vec![Notification::Complete]);
        assert!(subscription.is_closed());
    }

    #[test]
    fn test_throw_errors_every_subscriber() {
        let source = throw::<i32>(RxError::producer("unavailable"));
        for _ in 0..2 {
            let collector = Collector::new();
            source.subscribe(collector.clone());
            assert_eq!(
                collector.notifications(),
                vec![Notification::Error(RxError::producer("unavailable"))]
            );
        }
    }

    #[test]
    fn test_never_stays_active_until_cancelled() {
        let collector = Collector::<i32>::new();
        let subscription = never().subscribe(collector.clone());
        assert!(!subscription.is_closed());
        subscription.unsubscribe();
        assert!(collector.notifications().is_empty());
    }
}

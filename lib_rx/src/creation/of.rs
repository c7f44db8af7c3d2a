//! # Static Sequence Sources
//!
//! `of`, `from_iter` and `just` push captured values synchronously, in order,
//! inside `subscribe`, then complete. Values are captured once and cloned for
//! each subscription.

use std::sync::Arc;

use crate::core::{Observable, Subscriber};

/// Emits every value of `values` in order, then completes.
///
/// An empty input completes immediately, like [`empty`](super::empty).
pub fn of<T, I>(values: I) -> Observable<T>
where
    T: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    let values: Arc<[T]> = values.into_iter().collect();
    Observable::new(move |subscriber: Subscriber<T>| {
        for value in values.iter() {
            // A downstream `take` may cancel us mid-iteration.
            if subscriber.is_closed() {
                log::debug!("Sequence source cancelled before exhaustion");
                return;
            }
            subscriber.next(value.clone());
        }
        subscriber.complete();
    })
}

/// Alias of [`of`] for iterator-shaped inputs.
pub fn from_iter<T, I>(values: I) -> Observable<T>
where
    T: Clone + Send + Sync + 'static,
    I: IntoIterator<Item = T>,
{
    of(values)
}

/// Emits a single value, then completes.
pub fn just<T>(value: T) -> Observable<T>
where
    T: Clone + Send + Sync + 'static,
{
    of([value])
}

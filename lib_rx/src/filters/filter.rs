//! Predicate filtering.

use std::sync::Arc;

use crate::core::{Observable, Observer, Operator, RxError, Subscriber};

/// Operator returned by [`filter`].
pub struct Filter<P> {
    predicate: P,
}

/// Forwards only the values for which `predicate` returns `true`.
pub fn filter<P>(predicate: P) -> Filter<P> {
    Filter { predicate }
}

impl<T, P> Operator<T, T> for Filter<P>
where
    T: Send + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    fn apply(self, source: Observable<T>) -> Observable<T> {
        let predicate = Arc::new(self.predicate);
        source.lift(move |downstream, _upstream| FilterObserver {
            predicate: Arc::clone(&predicate),
            downstream,
        })
    }
}

struct FilterObserver<P, T> {
    predicate: Arc<P>,
    downstream: Subscriber<T>,
}

impl<T, P> Observer<T> for FilterObserver<P, T>
where
    T: Send + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    fn on_next(&mut self, value: T) {
        if (self.predicate)(&value) {
            self.downstream.next(value);
        }
    }

    fn on_error(&mut self, err: RxError) {
        self.downstream.error(err);
    }

    fn on_complete(&mut self) {
        self.downstream.complete();
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Method form of [`filter`].
    pub fn filter<P>(self, predicate: P) -> Observable<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.pipe(filter(predicate))
    }
}

//! # Skip
//!
//! Suppresses the first `count` values and forwards the rest. Termination is
//! forwarded unchanged regardless of how many values were skipped.

use crate::core::{Observable, Observer, Operator, RxError, Subscriber};

/// Operator returned by [`skip`].
#[derive(Debug, Clone, Copy)]
pub struct Skip {
    count: usize,
}

/// Drops the first `count` values. `skip(0)` is a pass-through.
pub fn skip(count: usize) -> Skip {
    Skip { count }
}

impl<T: Send + 'static> Operator<T, T> for Skip {
    fn apply(self, source: Observable<T>) -> Observable<T> {
        if self.count == 0 {
            return source;
        }
        let count = self.count;
        source.lift(move |downstream, _upstream| SkipObserver {
            remaining: count,
            downstream,
        })
    }
}

struct SkipObserver<T> {
    remaining: usize,
    downstream: Subscriber<T>,
}

impl<T: Send + 'static> Observer<T> for SkipObserver<T> {
    fn on_next(&mut self, value: T) {
        if self.remaining > 0 {
            self.remaining -= 1;
        } else {
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
    /// Method form of [`skip`].
    pub fn skip(self, count: usize) -> Observable<T> {
        self.pipe(skip(count))
    }
}

//! # Take
//!
//! Forwards the first `count` values, then completes early and cancels the
//! source without waiting for it to finish.
//!
//! ## State machine
//! `Collecting(remaining > 0)` moves to `Collecting(remaining - 1)` per value,
//! and to `Completed` when `remaining` reaches zero: upstream is cancelled,
//! then `Complete` is delivered downstream, both before `on_next` returns.
//! `Completed` is terminal and ignores anything still in flight. `take(0)`
//! starts in `Completed` and never subscribes upstream at all, so even an
//! infinite timer source never starts.

use crate::core::{Observable, Observer, Operator, RxError, Subscriber, Subscription, Teardown};

/// Operator returned by [`take`].
#[derive(Debug, Clone, Copy)]
pub struct Take {
    count: usize,
}

/// Forwards at most `count` values, then completes.
pub fn take(count: usize) -> Take {
    Take { count }
}

impl<T: Send + 'static> Operator<T, T> for Take {
    fn apply(self, source: Observable<T>) -> Observable<T> {
        let count = self.count;
        if count == 0 {
            return Observable::new(|downstream: Subscriber<T>| {
                log::debug!("take(0) completes without subscribing upstream");
                downstream.complete();
                Teardown::empty()
            });
        }
        source.lift(move |downstream, upstream| TakeObserver {
            state: TakeState::Collecting(count),
            downstream,
            upstream,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TakeState {
    Collecting(usize),
    Completed,
}

struct TakeObserver<T> {
    state: TakeState,
    downstream: Subscriber<T>,
    upstream: Subscription,
}

impl<T: Send + 'static> Observer<T> for TakeObserver<T> {
    fn on_next(&mut self, value: T) {
        let TakeState::Collecting(remaining) = self.state else {
            return;
        };

        self.downstream.next(value);
        if remaining > 1 {
            self.state = TakeState::Collecting(remaining - 1);
        } else {
            self.state = TakeState::Completed;
            self.upstream.unsubscribe();
            self.downstream.complete();
        }
    }

    fn on_error(&mut self, err: RxError) {
        if self.state != TakeState::Completed {
            self.state = TakeState::Completed;
            self.downstream.error(err);
        }
    }

    fn on_complete(&mut self) {
        if self.state != TakeState::Completed {
            self.state = TakeState::Completed;
            self.downstream.complete();
        }
    }
}

impl<T: Send + 'static> Observable<T> {
    /// Method form of [`take`].
    pub fn take(self, count: usize) -> Observable<T> {
        self.pipe(take(count))
    }
}

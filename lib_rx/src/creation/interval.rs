//! # Interval Source
//!
//! A time-driven, never-completing source. Each subscription spawns its own
//! tokio task with its own timer and its own counter starting at `0`.
//!
//! ## Timing contract
//! - The first tick fires one full `period` after subscription, not
//!   immediately.
//! - If delivery falls behind, missed ticks are delayed rather than burst.
//! - Cancellation flips a per-subscription `CancellationToken`; the task exits
//!   at its next scheduling point and the timer is dropped with it. A tick that
//!   is already being delivered completes, but none is started afterwards.
//!
//! ## Failure modes
//! Production errors are delivered as a terminal `Error` notification instead
//! of panicking: a zero `period`, or subscribing to [`interval`] outside of a
//! tokio runtime.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::core::{Observable, RxError, Subscriber, Teardown};

/// Emits `0, 1, 2, …` every `period` on the ambient tokio runtime.
pub fn interval(period: Duration) -> Observable<u64> {
    Observable::new(move |subscriber: Subscriber<u64>| match Handle::try_current() {
        Ok(handle) => start(period, &handle, subscriber),
        Err(e) => {
            subscriber.error(RxError::producer(format!("interval requires a tokio runtime: {}", e)));
            Teardown::empty()
        }
    })
}

/// Like [`interval`], but spawns on an explicit runtime handle.
///
/// Useful when subscribing from a thread that is not itself inside a runtime.
pub fn interval_on(period: Duration, handle: Handle) -> Observable<u64> {
    Observable::new(move |subscriber: Subscriber<u64>| start(period, &handle, subscriber))
}

fn start(period: Duration, handle: &Handle, subscriber: Subscriber<u64>) -> Teardown {
    if period.is_zero() {
        subscriber.error(RxError::producer("interval period must be greater than zero"));
        return Teardown::empty();
    }

    let token = CancellationToken::new();
    let cancelled = token.clone();
    // Measured from subscribe, not from when the task first runs.
    let first_tick = Instant::now() + period;

    handle.spawn(async move {
        log::debug!("Interval started with period {:?}", period);
        let mut ticker = time::interval_at(first_tick, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut counter: u64 = 0;

        loop {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => break,
                _ = ticker.tick() => {
                    if subscriber.is_closed() {
                        break;
                    }
                    log::trace!("Interval tick {}", counter);
                    subscriber.next(counter);
                    counter += 1;
                }
            }
        }
        log::debug!("Interval stopped after {} tick(s)", counter);
    });

    Teardown::from_fn(move || token.cancel())
}

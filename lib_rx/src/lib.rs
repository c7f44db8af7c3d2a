//! # lib_rx
//!
//! A push-based reactive stream engine. A producer emits a sequence of values
//! over time, terminated by an error or by completion; consumers subscribe,
//! transform and cancel that sequence compositionally.
//!
//! ```
//! use lib_rx::prelude::*;
//!
//! let collector = Collector::new();
//! of(vec![-1.5f64, 2.0, -3.0, 4.0])
//!     .pipe(abs())
//!     .pipe(skip(1))
//!     .pipe(take(2))
//!     .subscribe(collector.clone());
//!
//! assert_eq!(collector.values(), vec![2.0, 3.0]);
//! assert!(collector.is_completed());
//! ```
//!
//! ## Modules
//!
//! - **`core`**: the Observable / Observer / Subscription contract and `pipe`.
//! - **`creation`**: `of`, `just`, `empty`, `never`, `throw`, `interval`.
//! - **`transforms`**: `map`, `try_map`, `abs`.
//! - **`filters`**: `skip`, `take`, `filter`.
//! - **`observers`**: callback, no-op, print, collector and channel observers.
//! - **`loggers`** (feature `loggers`): console and file logging setup.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod core;
pub mod creation;
pub mod filters;
#[cfg(feature = "loggers")]
pub mod loggers;
pub mod observers;
pub mod transforms;

/// Everything needed to build and consume pipelines.
pub mod prelude {
    pub use crate::core::{
        is_well_formed, Notification, Observable, Observer, Operator, RxError, Subscriber, Subscription,
        SubscriptionState, Teardown,
    };
    pub use crate::creation::{empty, from_iter, interval, interval_on, just, never, of, throw};
    pub use crate::filters::{filter, skip, take};
    pub use crate::observers::{observer_fn, CallbackObserver, ChannelObserver, Collector, NoopObserver, PrintObserver};
    pub use crate::pipe;
    pub use crate::transforms::{abs, map, try_map, Absolute};
}

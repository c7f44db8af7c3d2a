//! # Core Engine Module
//!
//! The universal contract every producer and consumer obeys.
//!
//! ## Core Components:
//!
//! - **`notification`**: the `Next | Error | Complete` message type and the
//!   grammar check `Next* (Error | Complete)?`.
//! - **`observer`**: the three-capability sink trait.
//! - **`subscription`**: the idempotent cancellation handle and its teardown
//!   chain.
//! - **`subscriber`**: the guard a producer emits into; it serializes delivery
//!   and enforces the grammar.
//! - **`observable`**: the cold, immutable producer description.
//! - **`pipe`**: the `Operator` trait and left-to-right composition.
//!
//! ## Scheduling contract
//! Synchronous sources run entirely inside `subscribe` on the calling thread.
//! Asynchronous sources (timers) deliver from a tokio task. Either way an
//! operator's handlers run to completion once invoked and never suspend; the
//! only suspension points are the asynchronous sources themselves.

#![forbid(unsafe_code)]

/// Stream error taxonomy.
pub mod error;
/// The three-case message type.
pub mod notification;
/// The observable producer description.
pub mod observable;
/// The consumer capability set.
pub mod observer;
/// Operator composition.
pub mod pipe;
/// The producer-facing delivery guard.
pub mod subscriber;
/// The cancellation handle.
pub mod subscription;

// --- Public API Re-exports ---
pub use error::RxError;
pub use notification::{is_well_formed, Notification};
pub use observable::Observable;
pub use observer::Observer;
pub use pipe::Operator;
pub use subscriber::Subscriber;
pub use subscription::{Subscription, SubscriptionState, Teardown};

//! # Convenience Observers
//!
//! Adapters over the [`Observer`](crate::core::Observer) capability set. None of
//! them is part of the core contract; they exist so callers rarely need to
//! implement the trait by hand.
//!
//! - **`callback`**: three closures, or nothing at all (`NoopObserver`).
//! - **`print`**: colored diagnostic output.
//! - **`collector`**: a shared record of notifications, used heavily in tests.
//! - **`channel`**: a tokio mpsc bridge for async consumers.

#![forbid(unsafe_code)]

/// Closure-backed and no-op observers.
pub mod callback;
/// Tokio channel bridge.
pub mod channel;
/// Notification recorder.
pub mod collector;
/// Diagnostic printer.
pub mod print;

pub use callback::{observer_fn, CallbackObserver, NoopObserver};
pub use channel::ChannelObserver;
pub use collector::Collector;
pub use print::PrintObserver;

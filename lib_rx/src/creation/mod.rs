//! # Creation Operators
//!
//! Sources that construct observables from static data, timers, or terminal
//! states.
//!
//! - **`of`**: `of`, `from_iter` and `just`; synchronous, cold sequences.
//! - **`terminal`**: `empty`, `never` and `throw`.
//! - **`interval`**: a per-subscription tokio timer emitting a 0-based counter.

#![forbid(unsafe_code)]

/// Timer-driven counter source.
pub mod interval;
/// Synchronous sequence sources.
pub mod of;
/// Sources that only terminate (or never do).
pub mod terminal;

pub use interval::{interval, interval_on};
pub use of::{from_iter, just, of};
pub use terminal::{empty, never, throw};

//! # Filtering Operators
//!
//! Operators that pass through a subsequence of their input, by position
//! (`skip`, `take`) or by predicate (`filter`). `skip` and `take` keep
//! per-subscription counters; `take` terminates the stream early.

#![forbid(unsafe_code)]

/// Predicate-based filtering.
pub mod filter;
/// Positional suppression of a prefix.
pub mod skip;
/// Positional truncation with early completion.
pub mod take;

pub use filter::{filter, Filter};
pub use skip::{skip, Skip};
pub use take::{take, Take};

//! # Transformation Operators
//!
//! Stateless per-value operators. They never hold state between values and
//! pass termination through unchanged.

#![forbid(unsafe_code)]

/// Absolute value over signed numbers.
pub mod abs;
/// Infallible and fallible mapping.
pub mod map;

pub use abs::{abs, Abs, Absolute};
pub use map::{map, try_map, Map, TryMap};

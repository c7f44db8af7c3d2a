//! # Stream Errors
//!
//! The error carried by a terminal `Error` notification. Errors are values that
//! travel down the pipeline; the engine never panics on them.

use thiserror::Error;

/// # Rx Error
///
/// Classifies where in a pipeline a failure originated. It is `Clone` because a
/// cold source such as `throw` replays the same error to every subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RxError {
    /// Raised by a source's production logic (e.g. `throw`, a failed timer setup).
    #[error("producer error: {0}")]
    Producer(String),

    /// Raised when a transformation operator's function fails on an input.
    #[error("transform error: {0}")]
    Transform(String),
}

impl RxError {
    /// Builds a [`RxError::Producer`] from any message.
    pub fn producer(message: impl Into<String>) -> Self {
        Self::Producer(message.into())
    }

    /// Builds a [`RxError::Transform`] from any message.
    pub fn transform(message: impl Into<String>) -> Self {
        Self::Transform(message.into())
    }

    /// The message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Producer(m) | Self::Transform(m) => m,
        }
    }
}

// Bare messages come from fallible transform closures.
impl From<String> for RxError {
    fn from(message: String) -> Self {
        RxError::Transform(message)
    }
}

impl From<&str> for RxError {
    fn from(message: &str) -> Self {
        RxError::Transform(message.to_string())
    }
}

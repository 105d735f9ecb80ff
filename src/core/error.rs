//! Error types for flow runners.

use thiserror::Error;

/// Errors produced by the library itself.
///
/// Task failures are never represented here; they travel as the caller's own
/// error type inside [`Outcome`](super::Outcome) and
/// [`BatchOutcome`](super::BatchOutcome).
#[derive(Debug, Error)]
pub enum FlowError {
    /// Concurrency limit was zero.
    #[error("invalid limit: must be greater than 0")]
    InvalidLimit,
    /// Configuration failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The runtime refused or failed to run a spawned runner.
    #[error("spawn error: {0}")]
    Spawn(String),
}

/// A panic caught while running a synchronous function wrapped by
/// [`make_async_catching`](super::make_async_catching).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("task panicked: {message}")]
pub struct TaskPanic {
    /// Panic payload rendered as text.
    pub message: String,
}

impl TaskPanic {
    /// Build from a payload returned by `std::panic::catch_unwind`.
    pub fn from_payload(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self { message }
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;

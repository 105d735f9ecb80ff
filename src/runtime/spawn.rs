//! Spawning abstraction for runtimes.

use std::future::Future;

/// Abstraction for spawning a runner onto a runtime.
pub trait Spawn {
    /// Spawn an async task that runs to completion in the background.
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

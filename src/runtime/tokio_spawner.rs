//! Tokio runtime spawner implementation.

use std::future::Future;
use std::sync::Arc;

use tokio::runtime::{Handle, Runtime};

use crate::core::FlowError;
use crate::runtime::Spawn;

/// Tokio-based spawner that runs flow runners on a tokio runtime.
#[derive(Clone)]
pub struct TokioSpawner {
    handle: Handle,
    /// Keeps an owned runtime alive for as long as any clone exists.
    owned: Option<Arc<Runtime>>,
}

impl TokioSpawner {
    /// Create a `TokioSpawner` from a tokio runtime handle.
    pub const fn new(handle: Handle) -> Self {
        Self {
            handle,
            owned: None,
        }
    }

    /// Spawner bound to the runtime the caller is currently inside.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Spawn`] when called outside a tokio runtime.
    pub fn current() -> Result<Self, FlowError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| FlowError::Spawn(e.to_string()))
    }

    /// Create a `TokioSpawner` owning a new multi-threaded runtime with the
    /// given number of worker threads.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Spawn`] when the runtime cannot be built.
    pub fn with_worker_threads(worker_threads: usize) -> Result<Self, FlowError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads)
            .enable_all()
            .build()
            .map_err(|e| FlowError::Spawn(e.to_string()))?;
        Ok(Self {
            handle: runtime.handle().clone(),
            owned: Some(Arc::new(runtime)),
        })
    }
}

impl Spawn for TokioSpawner {
    fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handle.spawn(fut);
    }
}

impl std::fmt::Debug for TokioSpawner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokioSpawner")
            .field("owns_runtime", &self.owned.is_some())
            .finish()
    }
}

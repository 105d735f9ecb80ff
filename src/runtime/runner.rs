//! Callback-style surface over the flow runners.
//!
//! Each method spawns the matching runner on the configured [`Spawn`]
//! implementation and hands its final outcome to `callback` exactly once.
//! Methods return as soon as the runner has been spawned.

use std::future::Future;
use std::num::NonZeroUsize;

use crate::config::FlowConfig;
use crate::core::{self, BatchOutcome, FlowError, Outcome, Task};
use crate::runtime::Spawn;

/// Runs flows in the background and reports through final callbacks.
#[derive(Debug, Clone)]
pub struct FlowRunner<S> {
    spawner: S,
    default_limit: NonZeroUsize,
}

impl<S: Spawn> FlowRunner<S> {
    /// Create a runner from a spawner and validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidConfig`] if `config` fails validation.
    pub fn new(spawner: S, config: &FlowConfig) -> Result<Self, FlowError> {
        config.validate().map_err(FlowError::InvalidConfig)?;
        let default_limit = config.effective_limit();
        tracing::info!(default_limit = default_limit.get(), "flow runner ready");
        Ok(Self {
            spawner,
            default_limit,
        })
    }

    /// Limit applied by [`parallel_default`](Self::parallel_default).
    pub const fn default_limit(&self) -> NonZeroUsize {
        self.default_limit
    }

    /// Run `tasks` in sequence; `callback` receives the final outcome.
    pub fn serial<T, E, C>(&self, tasks: Vec<Task<T, E>>, callback: C)
    where
        T: Send + 'static,
        E: Send + 'static,
        C: FnOnce(Outcome<T, E>) + Send + 'static,
    {
        self.spawner.spawn(async move {
            callback(core::serial(tasks).await);
        });
    }

    /// Run `tasks` with at most `limit` in flight; `callback` receives the
    /// ordered results.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::InvalidLimit`] if `limit` is 0; nothing is spawned
    /// and `callback` is dropped uncalled.
    pub fn parallel<T, E, C>(
        &self,
        tasks: Vec<Task<T, E>>,
        limit: usize,
        callback: C,
    ) -> Result<(), FlowError>
    where
        T: Send + 'static,
        E: Send + 'static,
        C: FnOnce(BatchOutcome<T, E>) + Send + 'static,
    {
        let limit = NonZeroUsize::new(limit).ok_or(FlowError::InvalidLimit)?;
        self.spawn_parallel(tasks, limit, callback);
        Ok(())
    }

    /// [`parallel`](Self::parallel) with the configured default limit.
    pub fn parallel_default<T, E, C>(&self, tasks: Vec<Task<T, E>>, callback: C)
    where
        T: Send + 'static,
        E: Send + 'static,
        C: FnOnce(BatchOutcome<T, E>) + Send + 'static,
    {
        self.spawn_parallel(tasks, self.default_limit, callback);
    }

    /// Apply `f` to every value concurrently; `callback` receives the ordered
    /// results.
    pub fn map<V, T, E, F, Fut, C>(&self, values: Vec<V>, f: F, callback: C)
    where
        V: Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
        F: FnMut(V) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
        C: FnOnce(BatchOutcome<T, E>) + Send + 'static,
    {
        self.spawner.spawn(async move {
            callback(core::map(values, f).await);
        });
    }

    fn spawn_parallel<T, E, C>(&self, tasks: Vec<Task<T, E>>, limit: NonZeroUsize, callback: C)
    where
        T: Send + 'static,
        E: Send + 'static,
        C: FnOnce(BatchOutcome<T, E>) + Send + 'static,
    {
        self.spawner.spawn(async move {
            callback(core::parallel(tasks, limit).await);
        });
    }
}

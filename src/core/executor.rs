//! Executor trait for functions shared across every element of a map.

use async_trait::async_trait;

use super::Outcome;

/// Abstraction for the function a map applies to each value.
///
/// Useful when the shared function carries state (a client, a model handle)
/// and is easier to express as a type than as a closure.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
/// use prometheus_flow::core::{map_with_executor, Outcome, TaskExecutor};
///
/// struct Doubler;
///
/// #[async_trait]
/// impl TaskExecutor<String, String, std::io::Error> for Doubler {
///     async fn execute(&self, value: String) -> Outcome<String, std::io::Error> {
///         Outcome::ok(format!("{value}{value}"))
///     }
/// }
///
/// let outcome = map_with_executor(vec!["A".into(), "B".into()], Arc::new(Doubler)).await;
/// ```
#[async_trait]
pub trait TaskExecutor<V, T, E>: Send + Sync + 'static
where
    V: Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    /// Process one value and report its outcome.
    async fn execute(&self, value: V) -> Outcome<T, E>;
}

//! Lift synchronous functions into the task convention.

use std::panic::{catch_unwind, AssertUnwindSafe};

use futures::future;
use futures::FutureExt;

use super::{Outcome, TaskFuture, TaskPanic};

/// Wrap a synchronous function so it can be used wherever an async function
/// is expected.
///
/// The returned function runs `f` synchronously when called and hands back an
/// already-resolved future: `Ok(v)` becomes a successful outcome with `v`,
/// `Err(e)` a failed outcome with no value.
///
/// Use it as a transformer with `Task::transformer(make_async(f))` (taking
/// `Option<T>`) or directly as the function given to [`map`](super::map).
pub fn make_async<I, T, E, F>(f: F) -> impl Fn(I) -> TaskFuture<T, E> + Clone + Send + Sync + 'static
where
    F: Fn(I) -> Result<T, E> + Clone + Send + Sync + 'static,
    I: 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    move |input| future::ready(Outcome::from(f(input))).boxed()
}

/// Like [`make_async`], but a panic inside `f` is caught and delivered as an
/// error instead of unwinding out of the wrapper.
pub fn make_async_catching<I, T, E, F>(
    f: F,
) -> impl Fn(I) -> TaskFuture<T, E> + Clone + Send + Sync + 'static
where
    F: Fn(I) -> Result<T, E> + Clone + Send + Sync + 'static,
    I: 'static,
    T: Send + 'static,
    E: From<TaskPanic> + Send + 'static,
{
    move |input| {
        let outcome = match catch_unwind(AssertUnwindSafe(|| f(input))) {
            Ok(result) => Outcome::from(result),
            Err(payload) => {
                let panic = TaskPanic::from_payload(payload.as_ref());
                tracing::warn!(message = %panic.message, "wrapped function panicked");
                Outcome::err(E::from(panic))
            }
        };
        future::ready(outcome).boxed()
    }
}

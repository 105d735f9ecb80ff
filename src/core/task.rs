//! Task shapes accepted by the runners.
//!
//! A [`Task`] is either a zero-argument producer or a one-argument transformer.
//! The closure inside runs when a runner dispatches the task; the future it
//! returns resolves with the task's [`Outcome`]. Tasks written in completion
//! callback style receive a [`Done`] handle instead of returning a future.

use std::fmt;
use std::future::Future;

use futures::channel::oneshot;
use futures::future::BoxFuture;
use futures::FutureExt;

use super::Outcome;

/// Future returned by a dispatched task.
pub type TaskFuture<T, E> = BoxFuture<'static, Outcome<T, E>>;

type ProducerFn<T, E> = Box<dyn FnOnce() -> TaskFuture<T, E> + Send>;
type TransformerFn<T, E> = Box<dyn FnOnce(Option<T>) -> TaskFuture<T, E> + Send>;

/// An asynchronous unit of work.
///
/// The variant decides how a runner calls it: a producer takes nothing, a
/// transformer takes the previous result (or `None` when there is none).
pub enum Task<T, E> {
    /// Zero-argument producer.
    Producer(ProducerFn<T, E>),
    /// One-argument transformer receiving the previous result.
    Transformer(TransformerFn<T, E>),
}

impl<T, E> Task<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Producer from a closure returning a future.
    pub fn producer<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self::Producer(Box::new(move || f().boxed()))
    }

    /// Transformer from a closure returning a future.
    pub fn transformer<F, Fut>(f: F) -> Self
    where
        F: FnOnce(Option<T>) -> Fut + Send + 'static,
        Fut: Future<Output = Outcome<T, E>> + Send + 'static,
    {
        Self::Transformer(Box::new(move |input| f(input).boxed()))
    }

    /// Producer written in callback style: `f` is called with a [`Done`]
    /// handle at dispatch time and must eventually send through it.
    pub fn producer_fn<F>(f: F) -> Self
    where
        F: FnOnce(Done<T, E>) + Send + 'static,
    {
        Self::Producer(Box::new(move || {
            let (done, pending) = Done::channel();
            f(done);
            pending
        }))
    }

    /// Transformer written in callback style.
    pub fn transformer_fn<F>(f: F) -> Self
    where
        F: FnOnce(Option<T>, Done<T, E>) + Send + 'static,
    {
        Self::Transformer(Box::new(move |input| {
            let (done, pending) = Done::channel();
            f(input, done);
            pending
        }))
    }

    /// Call the task. Producers ignore `input`.
    pub fn invoke(self, input: Option<T>) -> TaskFuture<T, E> {
        match self {
            Self::Producer(f) => f(),
            Self::Transformer(f) => f(input),
        }
    }

    /// True for the zero-argument shape.
    pub const fn is_producer(&self) -> bool {
        matches!(self, Self::Producer(_))
    }
}

impl<T, E> fmt::Debug for Task<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Producer(_) => f.write_str("Task::Producer"),
            Self::Transformer(_) => f.write_str("Task::Transformer"),
        }
    }
}

/// Completion handle for callback-style tasks.
///
/// Every sending method consumes the handle, so a task can report at most
/// once. A handle dropped without sending leaves the task pending forever.
#[must_use = "a task must report through its Done handle or it never completes"]
pub struct Done<T, E> {
    tx: oneshot::Sender<Outcome<T, E>>,
}

impl<T, E> Done<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn channel() -> (Self, TaskFuture<T, E>) {
        let (tx, rx) = oneshot::channel();
        let pending = async move {
            if let Ok(outcome) = rx.await {
                return outcome;
            }
            tracing::warn!("task dropped its completion handle without reporting");
            futures::future::pending().await
        };
        (Self { tx }, pending.boxed())
    }

    /// Report an outcome.
    pub fn send(self, outcome: Outcome<T, E>) {
        // The receiver is gone only when the runner itself was dropped.
        let _ = self.tx.send(outcome);
    }

    /// Report success with a value.
    pub fn ok(self, value: T) {
        self.send(Outcome::ok(value));
    }

    /// Report a failure without a value.
    pub fn err(self, error: E) {
        self.send(Outcome::err(error));
    }

    /// Report the raw `(error, value)` pair.
    pub fn finish(self, error: Option<E>, value: Option<T>) {
        self.send(Outcome::with(error, value));
    }
}

impl<T, E> fmt::Debug for Done<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Done")
            .field("canceled", &self.tx.is_canceled())
            .finish()
    }
}

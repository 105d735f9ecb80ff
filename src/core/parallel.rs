//! Bounded-concurrency execution of a fixed task list.

use std::future::Future;
use std::num::NonZeroUsize;

use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use tracing::Instrument;

use super::{BatchOutcome, Outcome, ResultSlots, Task};
use crate::util::RunId;

/// Invoke a task now and tag its eventual outcome with the slot index it was
/// dispatched for.
fn dispatch<T, E>(index: usize, task: Task<T, E>) -> impl Future<Output = (usize, Outcome<T, E>)>
where
    T: Send + 'static,
    E: Send + 'static,
{
    task.invoke(None).map(move |outcome| (index, outcome))
}

/// Run `tasks` with at most `limit` of them in flight at any time.
///
/// Initially `min(limit, tasks.len())` tasks are dispatched in list order.
/// Each completion, successful or not, dispatches the next task that has not
/// started yet. Results land in the slot of the task's list position, so the
/// output order never depends on completion order.
///
/// Every task runs to completion even after a failure. The surfaced error is
/// the first one by completion order; later errors are kept in
/// [`BatchOutcome::suppressed`], and a failing task's reported value is still
/// recorded in its slot. An empty list resolves immediately with no results.
///
/// Tasks are called with no input; a [`Task::Transformer`] receives `None`.
pub async fn parallel<T, E>(tasks: Vec<Task<T, E>>, limit: NonZeroUsize) -> BatchOutcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    let total = tasks.len();
    let run_id = RunId::new();
    let span = tracing::debug_span!("parallel", %run_id, total, limit = limit.get());

    async move {
        let mut slots = ResultSlots::new(total);
        let mut first_error: Option<E> = None;
        let mut suppressed = Vec::new();
        let mut completed = 0usize;

        let mut cursor = tasks.into_iter().enumerate();
        let mut in_flight = FuturesUnordered::new();
        for (index, task) in cursor.by_ref().take(limit.get()) {
            tracing::debug!(index, "dispatching task");
            in_flight.push(dispatch(index, task));
        }

        while let Some((index, Outcome { error, value })) = in_flight.next().await {
            completed += 1;
            slots.fill(index, value);
            if let Some(error) = error {
                if first_error.is_none() {
                    tracing::warn!(index, "task failed; latching first error");
                    first_error = Some(error);
                } else {
                    tracing::debug!(index, "task failed after first error");
                    suppressed.push((index, error));
                }
            }
            tracing::debug!(index, completed, "task completed");

            if let Some((next, task)) = cursor.next() {
                tracing::debug!(index = next, "dispatching task");
                in_flight.push(dispatch(next, task));
            }
        }

        debug_assert_eq!(completed, total);
        BatchOutcome {
            error: first_error,
            results: slots.into_vec(),
            suppressed,
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn limit(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_empty_list_resolves_immediately() {
        let outcome: BatchOutcome<u8, ()> = block_on(parallel(Vec::new(), limit(3)));
        assert_eq!(outcome, BatchOutcome::empty());
    }

    #[test]
    fn test_limit_one_runs_in_order() {
        let (tx, rx) = std::sync::mpsc::channel();
        let tasks: Vec<Task<usize, ()>> = (0..4)
            .map(|i| {
                let tx = tx.clone();
                Task::producer(move || {
                    tx.send(i).unwrap();
                    async move { Outcome::ok(i * 10) }
                })
            })
            .collect();
        let outcome = block_on(parallel(tasks, limit(1)));
        assert_eq!(outcome.results, vec![Some(0), Some(10), Some(20), Some(30)]);
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_first_error_latched_in_completion_order() {
        let tasks: Vec<Task<u8, &str>> = vec![
            Task::producer(|| async { Outcome::with(Some("one"), Some(1)) }),
            Task::producer(|| async { Outcome::ok(2) }),
            Task::producer(|| async { Outcome::err("three") }),
        ];
        let outcome = block_on(parallel(tasks, limit(1)));
        assert_eq!(outcome.error, Some("one"));
        assert_eq!(outcome.results, vec![Some(1), Some(2), None]);
        assert_eq!(outcome.suppressed, vec![(2, "three")]);
    }
}

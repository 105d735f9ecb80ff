//! Unbounded concurrent mapping over a sequence of values.

use std::future::Future;
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use tracing::Instrument;

use super::{BatchOutcome, Outcome, ResultSlots, TaskExecutor};
use crate::util::RunId;

/// Apply `f` to every element of `values` concurrently.
///
/// All calls to `f` are made before any of the returned futures is polled, so
/// every element is in flight at once; there is no concurrency cap. Each
/// result lands in the slot of its element's position, and the run completes
/// when every slot has been filled. An empty input resolves immediately.
///
/// Error policy differs from [`parallel`](super::parallel): the surfaced error
/// is the most recently observed one when the last slot fills, so a later
/// failure replaces an earlier one. Replaced errors are moved to
/// [`BatchOutcome::suppressed`] rather than dropped.
pub async fn map<V, T, E, F, Fut>(values: Vec<V>, mut f: F) -> BatchOutcome<T, E>
where
    F: FnMut(V) -> Fut,
    Fut: Future<Output = Outcome<T, E>>,
{
    let total = values.len();
    let run_id = RunId::new();
    let span = tracing::debug_span!("map", %run_id, total);

    // Issue every call up front; only polling is left to the loop below.
    let mut in_flight: FuturesUnordered<_> = values
        .into_iter()
        .enumerate()
        .map(|(index, value)| f(value).map(move |outcome| (index, outcome)))
        .collect();
    tracing::debug!(parent: &span, issued = in_flight.len(), "all calls issued");

    async move {
        let mut slots = ResultSlots::new(total);
        let mut latest_error: Option<(usize, E)> = None;
        let mut suppressed = Vec::new();

        while !slots.is_complete() {
            let Some((index, Outcome { error, value })) = in_flight.next().await else {
                break;
            };
            slots.fill(index, value);
            if let Some(error) = error {
                tracing::warn!(index, "call failed; replacing surfaced error");
                if let Some(previous) = latest_error.replace((index, error)) {
                    suppressed.push(previous);
                }
            }
            tracing::debug!(index, filled = slots.filled(), "call completed");
        }

        BatchOutcome {
            error: latest_error.map(|(_, error)| error),
            results: slots.into_vec(),
            suppressed,
        }
    }
    .instrument(span)
    .await
}

/// [`map`] driven by a shared [`TaskExecutor`].
pub async fn map_with_executor<V, T, E, X>(values: Vec<V>, executor: Arc<X>) -> BatchOutcome<T, E>
where
    V: Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    X: TaskExecutor<V, T, E> + ?Sized,
{
    map(values, |value| {
        let executor = Arc::clone(&executor);
        async move { executor.execute(value).await }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn test_empty_values_resolve_immediately() {
        let outcome: BatchOutcome<u8, ()> =
            block_on(map(Vec::<u8>::new(), |v| async move { Outcome::ok(v) }));
        assert_eq!(outcome, BatchOutcome::empty());
    }

    #[test]
    fn test_all_calls_issued_before_polling() {
        let mut issued = 0;
        let outcome: BatchOutcome<String, ()> = block_on(map(vec!["A", "B", "C"], |v| {
            issued += 1;
            let seen = issued;
            async move { Outcome::ok(format!("{v}{seen}")) }
        }));
        assert_eq!(
            outcome.results,
            vec![Some("A1".to_string()), Some("B2".to_string()), Some("C3".to_string())]
        );
    }

    #[test]
    fn test_every_error_is_kept() {
        let outcome = block_on(map(vec![1u16, 2, 3], |v| async move {
            if v == 2 {
                Outcome::ok(v)
            } else {
                Outcome::with(Some(v * 100), Some(v))
            }
        }));
        assert_eq!(outcome.results, vec![Some(1), Some(2), Some(3)]);
        assert_eq!(outcome.failure_count(), 2);
        let mut errors: Vec<u16> = outcome.suppressed.iter().map(|(_, e)| *e).collect();
        errors.extend(outcome.error);
        errors.sort_unstable();
        assert_eq!(errors, vec![100, 300]);
    }
}

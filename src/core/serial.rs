//! Sequential execution with result threading.

use tracing::Instrument;

use super::{Outcome, Task};
use crate::util::RunId;

/// Run `steps` one after another, feeding each step the value reported by the
/// step before it.
///
/// Step 0 is always called with no previous result; step `i > 0` receives
/// step `i - 1`'s value. A [`Task::Producer`] ignores what it is handed, a
/// [`Task::Transformer`] receives it. The call shape is decided by the variant
/// and position, never by inspecting the closure.
///
/// The first failing step stops the run: later steps are never invoked and
/// the returned outcome carries that error along with whatever value the
/// failing step reported. An empty list resolves immediately with
/// [`Outcome::empty`].
///
/// ```rust,ignore
/// let outcome = serial(vec![
///     Task::producer(|| async { Outcome::ok(String::from("A")) }),
///     Task::transformer(|prev: Option<String>| async move {
///         Outcome::ok(prev.unwrap_or_default() + "B")
///     }),
/// ])
/// .await;
/// assert_eq!(outcome.value.as_deref(), Some("AB"));
/// ```
pub async fn serial<T, E>(steps: Vec<Task<T, E>>) -> Outcome<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    let total = steps.len();
    let run_id = RunId::new();
    let span = tracing::debug_span!("serial", %run_id, total);

    async move {
        let mut carried: Option<T> = None;
        for (index, step) in steps.into_iter().enumerate() {
            tracing::debug!(index, "invoking step");
            let Outcome { error, value } = step.invoke(carried.take()).await;
            if let Some(error) = error {
                tracing::warn!(index, skipped = total - index - 1, "step failed; stopping");
                return Outcome::with(Some(error), value);
            }
            carried = value;
        }
        tracing::debug!("all steps completed");
        Outcome::with(None, carried)
    }
    .instrument(span)
    .await
}

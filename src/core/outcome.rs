//! Completion shapes reported by tasks and runners.

/// What a task reports when it finishes: an optional error and an optional value.
///
/// Both may be present at once; a failing task is free to hand back a partial
/// value alongside its error, and runners record that value where they record
/// results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T, E> {
    /// Error reported by the task, if it failed.
    pub error: Option<E>,
    /// Value reported by the task, if any.
    pub value: Option<T>,
}

impl<T, E> Outcome<T, E> {
    /// Successful completion carrying a value.
    pub const fn ok(value: T) -> Self {
        Self {
            error: None,
            value: Some(value),
        }
    }

    /// Failed completion without a value.
    pub const fn err(error: E) -> Self {
        Self {
            error: Some(error),
            value: None,
        }
    }

    /// Successful completion that produced nothing.
    pub const fn empty() -> Self {
        Self {
            error: None,
            value: None,
        }
    }

    /// Completion with an explicit error/value pair.
    pub const fn with(error: Option<E>, value: Option<T>) -> Self {
        Self { error, value }
    }

    /// True when the task reported an error.
    pub const fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Collapse into a `Result`, discarding any value reported next to an error.
    ///
    /// # Errors
    ///
    /// Returns the reported error when there is one.
    pub fn into_result(self) -> Result<Option<T>, E> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.value),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(error) => Self::err(error),
        }
    }
}

/// Final outcome of a batch runner (`parallel` or `map`).
///
/// `results` always has one slot per input, in input order, including slots
/// for tasks that failed. `error` is the surfaced error; every other error
/// observed during the run is kept in `suppressed` with its slot index, in the
/// order it was observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome<T, E> {
    /// Surfaced error, if any task failed.
    pub error: Option<E>,
    /// Per-task values in input order.
    pub results: Vec<Option<T>>,
    /// Errors observed but not surfaced, tagged with their slot index.
    pub suppressed: Vec<(usize, E)>,
}

impl<T, E> BatchOutcome<T, E> {
    /// Outcome of a run over zero tasks.
    pub const fn empty() -> Self {
        Self {
            error: None,
            results: Vec::new(),
            suppressed: Vec::new(),
        }
    }

    /// True when at least one task failed.
    pub const fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Number of tasks that reported an error.
    pub fn failure_count(&self) -> usize {
        usize::from(self.error.is_some()) + self.suppressed.len()
    }

    /// Collapse into a `Result` over the ordered results.
    ///
    /// # Errors
    ///
    /// Returns the surfaced error when there is one.
    pub fn into_result(self) -> Result<Vec<Option<T>>, E> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.results),
        }
    }
}

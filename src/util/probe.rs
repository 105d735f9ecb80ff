//! Concurrency instrumentation for tasks under test or benchmark.

use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug, Default)]
struct ProbeState {
    current: usize,
    peak: usize,
    enters: usize,
    exits: usize,
    /// `current` at the moment of the first exit.
    at_first_exit: Option<usize>,
}

/// Counts how many instrumented tasks are in flight.
///
/// Call [`enter`](Self::enter) when a task starts and [`exit`](Self::exit)
/// when it reports. Clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct ConcurrencyProbe {
    state: Arc<Mutex<ProbeState>>,
}

/// Point-in-time copy of a probe's counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSnapshot {
    /// Tasks currently in flight.
    pub current: usize,
    /// Highest in-flight count observed.
    pub peak: usize,
    /// Total enters.
    pub enters: usize,
    /// Total exits.
    pub exits: usize,
    /// In-flight count when the first task exited, if any has.
    pub at_first_exit: Option<usize>,
}

impl ConcurrencyProbe {
    /// Fresh probe with zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a task starting. Returns the in-flight count including it.
    pub fn enter(&self) -> usize {
        let mut state = self.state.lock();
        state.current += 1;
        state.enters += 1;
        state.peak = state.peak.max(state.current);
        state.current
    }

    /// Record a task finishing.
    pub fn exit(&self) {
        let mut state = self.state.lock();
        if state.at_first_exit.is_none() {
            state.at_first_exit = Some(state.current);
        }
        state.current = state.current.saturating_sub(1);
        state.exits += 1;
    }

    /// Highest in-flight count observed so far.
    pub fn peak(&self) -> usize {
        self.state.lock().peak
    }

    /// Copy of all counters.
    pub fn snapshot(&self) -> ProbeSnapshot {
        let state = self.state.lock();
        ProbeSnapshot {
            current: state.current,
            peak: state.peak,
            enters: state.enters,
            exits: state.exits,
            at_first_exit: state.at_first_exit,
        }
    }
}

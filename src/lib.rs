//! # Prometheus Flow
//!
//! Flow-control combinators over asynchronous tasks for the Prometheus AI Platform.
//!
//! Agent pipelines constantly need the same three shapes of orchestration: run
//! steps one after another feeding each result forward, fan a fixed set of
//! jobs out under a concurrency cap, or apply one async function to a batch of
//! inputs. This crate provides exactly those, with results always returned in
//! input order regardless of completion order.
//!
//! ## Runners
//!
//! - **`serial`**: sequential, each step receives the previous step's value,
//!   stops at the first failure
//! - **`parallel`**: at most `limit` tasks in flight, every task runs to
//!   completion, the first error by completion order is surfaced
//! - **`map`**: one call per input, all issued up front, the most recently
//!   observed error is surfaced
//! - **`make_async`**: lifts a synchronous `Fn(I) -> Result<T, E>` into the
//!   same convention
//!
//! Every runner is a plain future. `FlowRunner` offers the same operations in
//! final-callback form on top of any [`runtime::Spawn`] implementation.
//!
//! ```rust,ignore
//! use std::num::NonZeroUsize;
//! use prometheus_flow::core::{parallel, Outcome, Task};
//!
//! let tasks: Vec<Task<&str, String>> = vec![
//!     Task::producer(|| async { Outcome::ok("A") }),
//!     Task::producer_fn(|done| done.ok("B")),
//! ];
//! let outcome = parallel(tasks, NonZeroUsize::new(2).unwrap()).await;
//! assert_eq!(outcome.results, vec![Some("A"), Some("B")]);
//! ```
//!
//! ## Callback form
//!
//! ```rust,ignore
//! use prometheus_flow::config::FlowConfig;
//! use prometheus_flow::runtime::{FlowRunner, TokioSpawner};
//!
//! let runner = FlowRunner::new(TokioSpawner::current()?, &FlowConfig::from_env()?)?;
//! runner.parallel(tasks, 4, |outcome| {
//!     tracing::info!(failed = outcome.is_err(), "batch finished");
//! })?;
//! ```
//!
//! Tasks are never cancelled or timed out: a task that never reports keeps
//! its runner pending.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Task shapes, outcomes and the flow runners.
pub mod core;
/// Configuration for flow runners.
pub mod config;
/// Runtime adapters and the callback-style runner surface.
pub mod runtime;
/// Shared utilities.
pub mod util;

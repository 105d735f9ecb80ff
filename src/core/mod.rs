//! Task shapes, outcomes and the flow runners.

pub mod adapter;
pub mod error;
pub mod executor;
pub mod map;
pub mod outcome;
pub mod parallel;
pub mod serial;
pub mod slots;
pub mod task;

pub use adapter::{make_async, make_async_catching};
pub use error::{AppResult, FlowError, TaskPanic};
pub use executor::TaskExecutor;
pub use map::{map, map_with_executor};
pub use outcome::{BatchOutcome, Outcome};
pub use parallel::parallel;
pub use serial::serial;
pub use slots::ResultSlots;
pub use task::{Done, Task, TaskFuture};

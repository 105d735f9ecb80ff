//! Runtime adapters and the callback-style runner surface.

pub mod runner;
pub mod spawn;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_spawner;

pub use runner::FlowRunner;
pub use spawn::Spawn;
#[cfg(feature = "tokio-runtime")]
pub use tokio_spawner::TokioSpawner;

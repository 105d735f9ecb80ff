pub mod probe;
pub mod run_id;
pub mod telemetry;

pub use probe::*;
pub use run_id::*;
pub use telemetry::*;

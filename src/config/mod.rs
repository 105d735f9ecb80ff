//! Configuration for flow runners.

pub mod flow;

pub use flow::FlowConfig;

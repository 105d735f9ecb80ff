//! Telemetry helpers for structured logging and tracing.

use crate::config::FlowConfig;

/// Initialize tracing/telemetry. Users can install their own subscriber; this
/// helper installs a default env-based subscriber if none is set.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Like [`init_tracing`], but prefers the filter from `config` over `RUST_LOG`.
pub fn init_tracing_with(config: &FlowConfig) {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let filter = config.log_filter.as_deref().map_or_else(
        tracing_subscriber::EnvFilter::from_default_env,
        tracing_subscriber::EnvFilter::new,
    );
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

//! Tests for shared utilities

use prometheus_flow::config::FlowConfig;
use prometheus_flow::util::{init_tracing, init_tracing_with, ConcurrencyProbe, RunId};

#[test]
fn test_run_ids_are_unique() {
    let a = RunId::new();
    let b = RunId::new();
    assert_ne!(a, b);
    assert_eq!(a.to_string(), a.as_uuid().to_string());
}

#[test]
fn test_init_tracing_is_idempotent() {
    init_tracing_with(&FlowConfig::new().with_log_filter("prometheus_flow=debug"));
    init_tracing();
    init_tracing_with(&FlowConfig::new());
}

#[test]
fn test_probe_exit_without_enter_saturates() {
    let probe = ConcurrencyProbe::new();
    probe.exit();
    let snap = probe.snapshot();
    assert_eq!(snap.current, 0);
    assert_eq!(snap.exits, 1);
    assert_eq!(snap.at_first_exit, Some(0));
}

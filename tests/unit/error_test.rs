//! Tests for error types

use prometheus_flow::core::{FlowError, TaskPanic};

#[test]
fn test_invalid_limit_error() {
    let err = FlowError::InvalidLimit;
    assert_eq!(format!("{}", err), "invalid limit: must be greater than 0");
}

#[test]
fn test_invalid_config_error() {
    let err = FlowError::InvalidConfig("default_limit must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid config: default_limit must be greater than 0"
    );
}

#[test]
fn test_spawn_error() {
    let err = FlowError::Spawn("no reactor running".to_string());
    assert_eq!(format!("{}", err), "spawn error: no reactor running");
}

#[test]
fn test_task_panic_from_payload() {
    let payload = std::panic::catch_unwind(|| panic!("boom {}", 7)).unwrap_err();
    let panic = TaskPanic::from_payload(payload.as_ref());
    assert_eq!(panic.message, "boom 7");
    assert_eq!(format!("{}", panic), "task panicked: boom 7");

    let payload: Box<dyn std::any::Any + Send> = Box::new(42u8);
    assert_eq!(
        TaskPanic::from_payload(payload.as_ref()).message,
        "non-string panic payload"
    );
}

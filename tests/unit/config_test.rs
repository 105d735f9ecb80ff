//! Tests for configuration validation

use std::collections::HashMap;

use prometheus_flow::config::flow::{ENV_DEFAULT_LIMIT, ENV_LOG_FILTER};
use prometheus_flow::config::FlowConfig;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_default_config_is_valid() {
    let cfg = FlowConfig::new();
    assert!(cfg.validate().is_ok());
    assert!(cfg.effective_limit().get() >= 1);
}

#[test]
fn test_zero_limit_invalid() {
    let cfg = FlowConfig::new().with_default_limit(0);
    assert!(cfg.validate().is_err());
}

#[test]
fn test_blank_log_filter_invalid() {
    let cfg = FlowConfig::new().with_log_filter("   ");
    assert!(cfg.validate().is_err());
}

#[test]
fn test_effective_limit_uses_configured_value() {
    let cfg = FlowConfig::new().with_default_limit(6);
    assert_eq!(cfg.effective_limit().get(), 6);
}

#[test]
fn test_from_json_str() {
    let cfg = FlowConfig::from_json_str(r#"{"default_limit": 4, "log_filter": "debug"}"#)
        .expect("valid json");
    assert_eq!(cfg.default_limit, Some(4));
    assert_eq!(cfg.log_filter.as_deref(), Some("debug"));

    let cfg = FlowConfig::from_json_str("{}").expect("defaults");
    assert_eq!(cfg, FlowConfig::default());
}

#[test]
fn test_from_json_str_rejects_invalid() {
    assert!(FlowConfig::from_json_str(r#"{"default_limit": 0}"#).is_err());
    assert!(FlowConfig::from_json_str("not json").is_err());
}

#[test]
fn test_from_lookup() {
    let cfg = FlowConfig::from_lookup(lookup(&[
        (ENV_DEFAULT_LIMIT, " 8 "),
        (ENV_LOG_FILTER, "prometheus_flow=trace"),
    ]))
    .expect("valid env");
    assert_eq!(cfg.default_limit, Some(8));
    assert_eq!(cfg.log_filter.as_deref(), Some("prometheus_flow=trace"));

    let cfg = FlowConfig::from_lookup(lookup(&[])).expect("empty env");
    assert_eq!(cfg, FlowConfig::default());
}

#[test]
fn test_from_lookup_rejects_bad_values() {
    let err = FlowConfig::from_lookup(lookup(&[(ENV_DEFAULT_LIMIT, "many")])).unwrap_err();
    assert!(err.to_string().contains(ENV_DEFAULT_LIMIT));
    assert!(FlowConfig::from_lookup(lookup(&[(ENV_DEFAULT_LIMIT, "0")])).is_err());
}

#[test]
fn test_config_serde_round_trip() {
    let cfg = FlowConfig::new().with_default_limit(2).with_log_filter("info");
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(FlowConfig::from_json_str(&json).unwrap(), cfg);
}

//! Runner configuration.

use std::num::NonZeroUsize;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::AppResult;

/// Environment variable holding the default parallel limit.
pub const ENV_DEFAULT_LIMIT: &str = "PROMETHEUS_FLOW_DEFAULT_LIMIT";
/// Environment variable holding the tracing filter directive.
pub const ENV_LOG_FILTER: &str = "PROMETHEUS_FLOW_LOG";

/// Flow runner configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Limit used by `parallel` when the caller does not pass one.
    /// `None` falls back to the number of logical CPUs.
    #[serde(default)]
    pub default_limit: Option<usize>,
    /// Tracing filter directive (e.g. `prometheus_flow=debug`).
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl FlowConfig {
    /// Empty configuration; every value falls back to its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default parallel limit.
    #[must_use]
    pub const fn with_default_limit(mut self, limit: usize) -> Self {
        self.default_limit = Some(limit);
        self
    }

    /// Set the tracing filter directive.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_limit == Some(0) {
            return Err("default_limit must be greater than 0".into());
        }
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                return Err("log_filter must not be empty".into());
            }
        }
        Ok(())
    }

    /// Limit to use when none is given explicitly.
    pub fn effective_limit(&self) -> NonZeroUsize {
        self.default_limit
            .and_then(NonZeroUsize::new)
            .or_else(|| NonZeroUsize::new(num_cpus::get()))
            .unwrap_or(NonZeroUsize::MIN)
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from the process environment, loading a `.env`
    /// file first if one is present.
    ///
    /// # Errors
    ///
    /// Fails when a variable is set but cannot be parsed, or when the
    /// resulting configuration is invalid.
    pub fn from_env() -> AppResult<Self> {
        // A missing .env file is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`FlowConfig::from_env`].
    pub fn from_lookup<L>(lookup: L) -> AppResult<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let default_limit = lookup(ENV_DEFAULT_LIMIT)
            .map(|raw| {
                raw.trim()
                    .parse::<usize>()
                    .with_context(|| format!("{ENV_DEFAULT_LIMIT} is not a number: {raw:?}"))
            })
            .transpose()?;
        let cfg = Self {
            default_limit,
            log_filter: lookup(ENV_LOG_FILTER),
        };
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }
}

//! Observability configuration.
//!
//! - `OBSERVABILITY_ENABLED`: Enables metrics and file logging (default: true)
//! - `METRICS_PORT`: Port of the Prometheus listener (default: 9090)
//! - `LOG_DIR`: Directory for rolling log files (default: `storage/logs`)

use std::env;

use crate::{flag_or, parse_or};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub enabled: bool,
    pub metrics_port: u16,
    pub log_dir: String,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            enabled: flag_or(&lookup, "OBSERVABILITY_ENABLED", true),
            metrics_port: parse_or(&lookup, "METRICS_PORT", 9090),
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "storage/logs".to_string()),
        }
    }
}

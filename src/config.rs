/*!
 * Configuration
 *
 * Environment-driven settings for the binaries:
 * - FACTORIAL_CONFIG_JSON: full config as JSON (takes precedence)
 * - FACTORIAL_WORKERS: `start:budget_ms` pairs, comma separated
 * - FACTORIAL_UNBOUNDED_START: first n for the unbounded run
 * - FACTORIAL_TRACE_JSON: `1`/`true` for JSON log output
 */

use crate::core::{ConfigError, Millis};
use serde::{Deserialize, Serialize};
use std::env;

pub const ENV_CONFIG_JSON: &str = "FACTORIAL_CONFIG_JSON";
pub const ENV_WORKERS: &str = "FACTORIAL_WORKERS";
pub const ENV_UNBOUNDED_START: &str = "FACTORIAL_UNBOUNDED_START";
pub const ENV_TRACE_JSON: &str = "FACTORIAL_TRACE_JSON";

pub const DEFAULT_UNBOUNDED_START: i64 = 9000;

/// Parameters for one time-bounded factorial worker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSpec {
    pub start_n: i64,
    pub budget_ms: Millis,
}

impl WorkerSpec {
    pub const fn new(start_n: i64, budget_ms: Millis) -> Self {
        Self { start_n, budget_ms }
    }

    /// Parse `start:budget_ms`
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidWorkerSpec(raw.to_string());
        let (start, budget) = raw.trim().split_once(':').ok_or_else(invalid)?;
        let start_n = start.trim().parse().map_err(|_| invalid())?;
        let budget_ms = budget.trim().parse().map_err(|_| invalid())?;
        Ok(Self { start_n, budget_ms })
    }

    /// Parse a comma-separated list; empty entries are skipped
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, ConfigError> {
        raw.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Self::parse)
            .collect()
    }
}

/// The two workers of the classic demonstration
pub const DEFAULT_WORKERS: [WorkerSpec; 2] = [
    WorkerSpec::new(4000, 500),
    WorkerSpec::new(7000, 500),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub workers: Vec<WorkerSpec>,
    pub unbounded_start: i64,
    pub trace_json: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS.to_vec(),
            unbounded_start: DEFAULT_UNBOUNDED_START,
            trace_json: false,
        }
    }
}

impl HarnessConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(json) = lookup(ENV_CONFIG_JSON) {
            return Ok(serde_json::from_str(&json)?);
        }

        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_WORKERS) {
            config.workers = WorkerSpec::parse_list(&raw)?;
        }

        if let Some(raw) = lookup(ENV_UNBOUNDED_START) {
            config.unbounded_start = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: ENV_UNBOUNDED_START.to_string(),
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup(ENV_TRACE_JSON) {
            config.trace_json = raw == "1" || raw.eq_ignore_ascii_case("true");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.workers, vec![WorkerSpec::new(4000, 500), WorkerSpec::new(7000, 500)]);
        assert_eq!(config.unbounded_start, 9000);
        assert!(!config.trace_json);
    }

    #[test]
    fn test_worker_list() {
        let config =
            HarnessConfig::from_lookup(lookup_from(&[(ENV_WORKERS, " 10:20 , 30:40,")])).unwrap();
        assert_eq!(config.workers, vec![WorkerSpec::new(10, 20), WorkerSpec::new(30, 40)]);
    }

    #[test]
    fn test_bad_worker() {
        let err = HarnessConfig::from_lookup(lookup_from(&[(ENV_WORKERS, "10-20")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidWorkerSpec("10-20".into()));
    }

    #[test]
    fn test_bad_start() {
        let err =
            HarnessConfig::from_lookup(lookup_from(&[(ENV_UNBOUNDED_START, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn test_json_takes_precedence() {
        let config = HarnessConfig::from_lookup(lookup_from(&[
            (ENV_CONFIG_JSON, r#"{"workers":[{"start_n":1,"budget_ms":2}],"trace_json":true}"#),
            (ENV_WORKERS, "99:99"),
        ]))
        .unwrap();
        assert_eq!(config.workers, vec![WorkerSpec::new(1, 2)]);
        assert!(config.trace_json);
        assert_eq!(config.unbounded_start, DEFAULT_UNBOUNDED_START);
    }
}

/*!
 * Configuration Tests
 * These mutate process environment, so they run serially
 */

use lazy_factorials::config::{
    HarnessConfig, WorkerSpec, ENV_CONFIG_JSON, ENV_TRACE_JSON, ENV_UNBOUNDED_START, ENV_WORKERS,
};
use lazy_factorials::ConfigError;
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;

fn clear_env() {
    for var in [ENV_CONFIG_JSON, ENV_WORKERS, ENV_UNBOUNDED_START, ENV_TRACE_JSON] {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    clear_env();
    assert_eq!(HarnessConfig::from_env().unwrap(), HarnessConfig::default());
}

#[test]
#[serial]
fn test_from_env_overrides() {
    clear_env();
    env::set_var(ENV_WORKERS, "1:2,3:4,5:6");
    env::set_var(ENV_UNBOUNDED_START, "42");
    env::set_var(ENV_TRACE_JSON, "TRUE");

    let config = HarnessConfig::from_env().unwrap();
    clear_env();

    assert_eq!(
        config.workers,
        vec![WorkerSpec::new(1, 2), WorkerSpec::new(3, 4), WorkerSpec::new(5, 6)]
    );
    assert_eq!(config.unbounded_start, 42);
    assert!(config.trace_json);
}

#[test]
#[serial]
fn test_from_env_bad_json() {
    clear_env();
    env::set_var(ENV_CONFIG_JSON, "{not json");
    let err = HarnessConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_worker_spec_parse() {
    assert_eq!(WorkerSpec::parse("4000:500"), Ok(WorkerSpec::new(4000, 500)));
    assert_eq!(WorkerSpec::parse("-4:0"), Ok(WorkerSpec::new(-4, 0)));
    assert!(WorkerSpec::parse("4000:-1").is_err());
    assert!(WorkerSpec::parse("4000").is_err());
}

#[test]
fn test_config_round_trips_through_json() {
    let config = HarnessConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let back: HarnessConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

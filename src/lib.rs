/*!
 * Lazy Factorials Library
 * Lazy sequences, time-bounded factorial drivers and a running average
 */

pub mod config;
pub mod core;
pub mod driver;
pub mod factorial;
pub mod monitoring;
pub mod sequence;
pub mod stats;

// Re-exports
pub use config::{HarnessConfig, WorkerSpec};
pub use crate::core::{ComputeError, ComputeResult, ConfigError};
pub use driver::{
    run_bounded_factorials, run_concurrent_factorials, run_interleaved, run_unbounded,
    BoundedRun, ConcurrentHarness, LaunchedWorkers,
};
pub use factorial::{cooperative_factorial, factorial, FactorialObserver};
pub use monitoring::init_tracing;
pub use sequence::{ascending_from, map_sequence, take_until_timeout, SequenceExt};
pub use stats::cumulative_average;

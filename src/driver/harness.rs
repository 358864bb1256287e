/*!
 * Concurrent Harness
 *
 * Fire-and-forget launch of independent bounded factorial workers, one OS
 * thread each. Workers share nothing but the observer sink and the clock,
 * never synchronise, and report their own outcome in the log. No result or
 * error ever travels back to the launcher.
 */

use super::bounded::run_bounded_factorials_with;
use crate::config::WorkerSpec;
use crate::core::ComputeResult;
use crate::factorial::{FactorialObserver, TracingObserver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{error, info, warn};

/// Launches bounded factorial workers on detached threads
pub struct ConcurrentHarness {
    observer: Arc<dyn FactorialObserver>,
    name_prefix: String,
}

impl Default for ConcurrentHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl ConcurrentHarness {
    /// Harness whose workers log through tracing
    pub fn new() -> Self {
        Self::with_observer(Arc::new(TracingObserver))
    }

    pub fn with_observer(observer: Arc<dyn FactorialObserver>) -> Self {
        Self {
            observer,
            name_prefix: "factorials".to_string(),
        }
    }

    /// Thread name prefix; workers are named `{prefix}-{index}`
    pub fn with_name_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.name_prefix = prefix.into();
        self
    }

    /// Start one worker per spec and return immediately
    ///
    /// If a later spawn fails, workers already started keep running.
    pub fn launch(&self, specs: &[WorkerSpec]) -> ComputeResult<LaunchedWorkers> {
        let mut handles = Vec::with_capacity(specs.len());

        for (index, spec) in specs.iter().copied().enumerate() {
            let name = format!("{}-{}", self.name_prefix, index);
            let observer = Arc::clone(&self.observer);

            let handle = thread::Builder::new()
                .name(name.clone())
                .spawn(move || run_worker(spec, observer.as_ref()))?;

            info!(worker = %name, start_n = spec.start_n, budget_ms = spec.budget_ms, "worker launched");
            handles.push((name, handle));
        }

        Ok(LaunchedWorkers { handles })
    }
}

fn run_worker(spec: WorkerSpec, observer: &dyn FactorialObserver) {
    info!(start_n = spec.start_n, budget_ms = spec.budget_ms, "worker started");
    match run_bounded_factorials_with(spec.start_n, spec.budget_ms, observer) {
        Ok(run) => info!(
            completed = run.completed,
            last_n = ?run.last_n,
            elapsed_ms = run.elapsed.as_millis() as u64,
            "worker done"
        ),
        Err(e) => error!(error = %e, start_n = spec.start_n, "worker failed"),
    }
}

/// Handles of launched workers
///
/// Dropping this detaches the threads. `wait` only exists so that a process
/// entry point can stay alive until its workers end; it returns nothing
/// about what the workers computed.
#[derive(Debug)]
pub struct LaunchedWorkers {
    handles: Vec<(String, JoinHandle<()>)>,
}

impl LaunchedWorkers {
    /// Thread names, in launch order
    pub fn names(&self) -> Vec<&str> {
        self.handles.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Block until every worker thread has exited
    ///
    /// Returns how many workers panicked.
    pub fn wait(self) -> usize {
        let mut panicked = 0;
        for (name, handle) in self.handles {
            if handle.join().is_err() {
                warn!(worker = %name, "worker panicked");
                panicked += 1;
            }
        }
        panicked
    }
}

/// Launch the given workers with tracing diagnostics
pub fn run_concurrent_factorials(specs: &[WorkerSpec]) -> ComputeResult<LaunchedWorkers> {
    ConcurrentHarness::new().launch(specs)
}

/*!
 * Factorial Observers
 *
 * Sinks for the one-diagnostic-per-factorial contract. Observers only see
 * `(timestamp, n)` after the product is complete and cannot influence the
 * returned value.
 */

use crate::core::{group_thousands, Nanos};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use tracing::info;

/// Receives one notification per completed factorial
pub trait FactorialObserver: Send + Sync {
    fn computed(&self, timestamp_ns: Nanos, n: i64);
}

impl<O: FactorialObserver + ?Sized> FactorialObserver for Arc<O> {
    fn computed(&self, timestamp_ns: Nanos, n: i64) {
        (**self).computed(timestamp_ns, n)
    }
}

impl<O: FactorialObserver + ?Sized> FactorialObserver for &O {
    fn computed(&self, timestamp_ns: Nanos, n: i64) {
        (**self).computed(timestamp_ns, n)
    }
}

/// Logs `at time 1,234,567: computed n!` through tracing
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FactorialObserver for TracingObserver {
    fn computed(&self, timestamp_ns: Nanos, n: i64) {
        info!(
            target: "factorial",
            timestamp_ns,
            n,
            "at time {}: computed {}!",
            group_thousands(timestamp_ns),
            n
        );
    }
}

/// Discards every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl FactorialObserver for NullObserver {
    fn computed(&self, _timestamp_ns: Nanos, _n: i64) {}
}

/// One captured notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub thread: Option<String>,
    pub timestamp_ns: Nanos,
    pub n: i64,
}

/// Captures notifications in arrival order, tagged with the thread name
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<Observation>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything observed so far
    pub fn snapshot(&self) -> Vec<Observation> {
        self.events.lock().clone()
    }

    /// `n` values observed on the named thread, in arrival order
    pub fn values_for_thread(&self, name: &str) -> Vec<i64> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.thread.as_deref() == Some(name))
            .map(|e| e.n)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl FactorialObserver for RecordingObserver {
    fn computed(&self, timestamp_ns: Nanos, n: i64) {
        let thread = thread::current().name().map(str::to_owned);
        self.events.lock().push(Observation {
            thread,
            timestamp_ns,
            n,
        });
    }
}

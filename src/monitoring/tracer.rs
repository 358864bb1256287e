/*!
 * Tracing
 * Structured logging for factorial runs using the tracing crate
 *
 * Features:
 * - Per-run UUIDs for correlating worker output
 * - JSON-formatted logs for structured parsing
 * - Thread names on every line, so interleaved workers stay distinguishable
 */

use std::time::Instant;
use tracing::{debug, info, span, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!(json, "structured tracing initialized");
    }
}

/// Generate a unique ID for a bounded run
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one time-bounded run
///
/// Records the number of completed elements and the elapsed time when
/// dropped.
pub struct RunSpan {
    span: Span,
    start: Instant,
    run_id: String,
    completed: u64,
}

impl RunSpan {
    pub fn new(start_n: i64, budget_ms: u64) -> Self {
        let run_id = generate_run_id();

        let span = span!(
            Level::INFO,
            "bounded_run",
            run_id = %run_id,
            start_n,
            budget_ms,
            completed = tracing::field::Empty,
            elapsed_ms = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            run_id,
            completed: 0,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// The underlying span, for entering around the work
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Record how many elements finished inside the budget
    pub fn record_completed(&mut self, completed: u64) {
        self.completed = completed;
        self.span.record("completed", completed);
    }
}

impl Drop for RunSpan {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        self.span.record("elapsed_ms", elapsed.as_millis() as u64);
        let _entered = self.span.enter();
        info!(
            run_id = %self.run_id,
            completed = self.completed,
            elapsed_ms = elapsed.as_millis() as u64,
            "bounded run finished"
        );
    }
}

/*!
 * Concurrent Factorials - Main Entry Point
 *
 * Launches the configured bounded factorial workers (by default 4000! and
 * 7000! onward, 500ms each) on separate threads. Their diagnostic lines
 * interleave nondeterministically; that is the point of the demonstration.
 */

use anyhow::Result;
use lazy_factorials::core::{group_thousands, monotonic_ns};
use lazy_factorials::{init_tracing, run_concurrent_factorials, HarnessConfig};
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = HarnessConfig::from_env()?;
    init_tracing(config.trace_json);

    info!(
        "at time {}: main started",
        group_thousands(monotonic_ns())
    );
    info!(config = %serde_json::to_string(&config)?, "configuration loaded");

    let workers = run_concurrent_factorials(&config.workers)?;

    info!("at time {}: main done", group_thousands(monotonic_ns()));

    // Non-daemon semantics: the process lives until its workers finish.
    let panicked = workers.wait();
    if panicked > 0 {
        warn!(panicked, "some workers panicked");
    }
    Ok(())
}

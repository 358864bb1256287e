/*!
 * Cooperative Factorials
 *
 * Runs fact(99) and fact(100) on a single-threaded async runtime. Each
 * multiplication yields, so the two computations advance in turns.
 * Use RUST_LOG=trace to see every step.
 */

use anyhow::Result;
use lazy_factorials::{init_tracing, run_interleaved, HarnessConfig};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = HarnessConfig::from_env()?;
    init_tracing(config.trace_json);

    let (first, second) = run_interleaved(99, 100).await;
    let (first, second) = (first?, second?);
    info!(fact_99 = %first, fact_100 = %second, "both factorials done");
    Ok(())
}

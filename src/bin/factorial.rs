/*!
 * Unbounded Factorials
 *
 * Computes 9000!, 9001!, ... (or from FACTORIAL_UNBOUNDED_START) forever,
 * logging one line per factorial. This never terminates on its own; stop it
 * with Ctrl+C.
 */

use anyhow::Result;
use lazy_factorials::{init_tracing, run_unbounded, HarnessConfig};

fn main() -> Result<()> {
    let config = HarnessConfig::from_env()?;
    init_tracing(config.trace_json);

    run_unbounded(config.unbounded_start)?;
    Ok(())
}

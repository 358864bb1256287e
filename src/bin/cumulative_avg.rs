/*!
 * Cumulative Average
 * Averages the numbers given on the command line (default: 2 4 6)
 */

use anyhow::{Context, Result};
use lazy_factorials::{cumulative_average, init_tracing, HarnessConfig};
use tracing::info;

fn main() -> Result<()> {
    let config = HarnessConfig::from_env()?;
    init_tracing(config.trace_json);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let data: Vec<f64> = if args.is_empty() {
        vec![2.0, 4.0, 6.0]
    } else {
        args.iter()
            .map(|raw| {
                raw.parse::<f64>()
                    .with_context(|| format!("not a number: {}", raw))
            })
            .collect::<Result<_>>()?
    };

    let average = cumulative_average(data.iter().copied())?;
    info!(count = data.len(), average, "cumulative average");
    println!("{}", average);
    Ok(())
}

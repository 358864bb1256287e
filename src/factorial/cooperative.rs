/*!
 * Cooperative Factorial
 *
 * Async variant that yields to the scheduler after every multiplication, so
 * several computations sharing one runtime thread make progress in turns.
 */

use super::observer::FactorialObserver;
use crate::core::{monotonic_ns, ComputeError, ComputeResult};
use num_bigint::BigUint;
use tracing::{debug, trace};

/// `n!` computed one multiplication per scheduler turn
pub async fn cooperative_factorial<O>(n: i64, observer: &O) -> ComputeResult<BigUint>
where
    O: FactorialObserver + ?Sized,
{
    if n < 0 {
        return Err(ComputeError::InvalidArgument { n });
    }

    debug!(n, "starting fact({})", n);
    let mut result = BigUint::from(1u32);
    for i in 1..=n as u64 {
        trace!(n, step = i, "working on fact({})", n);
        result *= i;
        tokio::task::yield_now().await;
    }
    debug!(n, "done fact({})", n);

    observer.computed(monotonic_ns(), n);
    Ok(result)
}

/*!
 * Interleaved Async Driver
 * Two cooperative factorials sharing one task, advancing in turns
 */

use crate::core::ComputeResult;
use crate::factorial::{cooperative_factorial, FactorialObserver, TracingObserver};
use num_bigint::BigUint;
use tracing::info;

/// Run `a!` and `b!` concurrently on the current task
pub async fn run_interleaved(a: i64, b: i64) -> (ComputeResult<BigUint>, ComputeResult<BigUint>) {
    run_interleaved_with(a, b, &TracingObserver).await
}

pub async fn run_interleaved_with<O>(
    a: i64,
    b: i64,
    observer: &O,
) -> (ComputeResult<BigUint>, ComputeResult<BigUint>)
where
    O: FactorialObserver + ?Sized,
{
    info!(a, b, "interleaving cooperative factorials");
    tokio::join!(
        cooperative_factorial(a, observer),
        cooperative_factorial(b, observer)
    )
}

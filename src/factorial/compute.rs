/*!
 * Factorial
 *
 * Iterative arbitrary-precision `n!`. Negative input is rejected instead of
 * returning the empty product.
 */

use super::observer::{FactorialObserver, TracingObserver};
use crate::core::{monotonic_ns, ComputeError, ComputeResult};
use num_bigint::BigUint;

/// `n!`, logging one diagnostic line through tracing
pub fn factorial(n: i64) -> ComputeResult<BigUint> {
    factorial_with(n, &TracingObserver)
}

/// `n!`, reporting the completion timestamp to `observer`
pub fn factorial_with<O>(n: i64, observer: &O) -> ComputeResult<BigUint>
where
    O: FactorialObserver + ?Sized,
{
    let result = product_up_to(n)?;
    observer.computed(monotonic_ns(), n);
    Ok(result)
}

/// The bare product `1 * 2 * ... * n`, with no diagnostics
fn product_up_to(n: i64) -> ComputeResult<BigUint> {
    if n < 0 {
        return Err(ComputeError::InvalidArgument { n });
    }
    let mut result = BigUint::from(1u32);
    for i in 2..=n as u64 {
        result *= i;
    }
    Ok(result)
}

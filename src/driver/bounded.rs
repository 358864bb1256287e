/*!
 * Time-Bounded Factorial Driver
 *
 * `start_n!, (start_n+1)!, ...` drained through a cooperative deadline.
 * Values are discarded; the diagnostics are the observable effect.
 */

use crate::core::{ComputeError, ComputeResult, Millis};
use crate::factorial::{factorial_with, FactorialObserver, TracingObserver};
use crate::monitoring::RunSpan;
use crate::sequence::{ascending_from, SequenceExt};
use serde::Serialize;
use std::time::Duration;

/// Summary of one bounded run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundedRun {
    pub start_n: i64,
    /// Factorials completed before the deadline
    pub completed: u64,
    /// Last n handed through, if any
    pub last_n: Option<i64>,
    pub budget: Duration,
    pub elapsed: Duration,
}

/// Compute increasing factorials from `start_n!` until `budget_ms` elapses
pub fn run_bounded_factorials(start_n: i64, budget_ms: Millis) -> ComputeResult<BoundedRun> {
    run_bounded_factorials_with(start_n, budget_ms, &TracingObserver)
}

/// [`run_bounded_factorials`] reporting to `observer`
///
/// A negative `start_n` is rejected before any work starts, whatever the
/// budget.
pub fn run_bounded_factorials_with<O>(
    start_n: i64,
    budget_ms: Millis,
    observer: &O,
) -> ComputeResult<BoundedRun>
where
    O: FactorialObserver + ?Sized,
{
    if start_n < 0 {
        return Err(ComputeError::InvalidArgument { n: start_n });
    }

    let mut run_span = RunSpan::new(start_n, budget_ms);
    let span = run_span.span().clone();
    let _entered = span.enter();

    let mut factorials = ascending_from(start_n)
        .map_sequence(|n| factorial_with(n, observer).map(|_value| n))
        .take_until_timeout(budget_ms);

    let mut last_n = None;
    for computed in factorials.by_ref() {
        last_n = Some(computed?);
    }

    run_span.record_completed(factorials.yielded());

    Ok(BoundedRun {
        start_n,
        completed: factorials.yielded(),
        last_n,
        budget: factorials.budget(),
        elapsed: factorials.elapsed(),
    })
}

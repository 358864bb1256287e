/*!
 * Unbounded Driver
 *
 * Drives `start!, (start+1)!, ...` with no deadline. Used by the `factorial`
 * binary as an intentionally endless demonstration; callers that need it to
 * stop pass a limit or use the bounded driver instead.
 */

use crate::core::ComputeResult;
use crate::factorial::{factorial_with, FactorialObserver, TracingObserver};
use crate::sequence::{ascending_from, SequenceExt};
use tracing::info;

/// Compute factorials from `start!` onward, forever
///
/// Only returns on error, or after `i64::MAX!` in theory.
pub fn run_unbounded(start: i64) -> ComputeResult<u64> {
    run_unbounded_with(start, &TracingObserver, None)
}

/// Unbounded pipeline with an optional cap on the number of factorials
///
/// Returns how many factorials were computed.
pub fn run_unbounded_with<O>(start: i64, observer: &O, limit: Option<u64>) -> ComputeResult<u64>
where
    O: FactorialObserver + ?Sized,
{
    info!(start, limit = ?limit, "unbounded factorial run starting");

    let factorials = ascending_from(start).map_sequence(|n| factorial_with(n, observer));

    let mut computed = 0u64;
    for value in factorials {
        value?;
        computed += 1;
        if limit.is_some_and(|cap| computed >= cap) {
            break;
        }
    }
    Ok(computed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factorial::RecordingObserver;

    #[test]
    fn test_limit_bounds_the_loop() {
        let recorder = RecordingObserver::new();
        let computed = run_unbounded_with(9000, &recorder, Some(3)).unwrap();
        assert_eq!(computed, 3);

        let seen: Vec<i64> = recorder.snapshot().iter().map(|o| o.n).collect();
        assert_eq!(seen, vec![9000, 9001, 9002]);
    }

    #[test]
    fn test_negative_start_fails_immediately() {
        let recorder = RecordingObserver::new();
        assert!(run_unbounded_with(-1, &recorder, None).is_err());
        assert!(recorder.is_empty());
    }
}

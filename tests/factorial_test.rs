/*!
 * Factorial Tests
 */

use lazy_factorials::factorial::{
    cooperative_factorial, factorial, factorial_with, NullObserver, RecordingObserver,
};
use lazy_factorials::ComputeError;
use num_bigint::BigUint;
use pretty_assertions::assert_eq;

#[test]
fn test_known_values() {
    assert_eq!(factorial(0), Ok(BigUint::from(1u32)));
    assert_eq!(factorial(5), Ok(BigUint::from(120u32)));
    assert_eq!(
        factorial(20),
        Ok(BigUint::from(2_432_902_008_176_640_000u64))
    );
}

#[test]
fn test_negative_input_fails_fast() {
    assert_eq!(factorial(-1), Err(ComputeError::InvalidArgument { n: -1 }));
    assert_eq!(
        factorial(i64::MIN),
        Err(ComputeError::InvalidArgument { n: i64::MIN })
    );
}

#[test]
fn test_recurrence() {
    let mut previous = factorial_with(0, &NullObserver).unwrap();
    for n in 1..200i64 {
        let current = factorial_with(n, &NullObserver).unwrap();
        assert_eq!(current, &previous * BigUint::from(n as u64));
        previous = current;
    }
}

#[test]
fn test_large_factorial_digit_count() {
    // 1000! has 2568 decimal digits
    let value = factorial_with(1000, &NullObserver).unwrap();
    assert_eq!(value.to_string().len(), 2568);
}

#[test]
fn test_exactly_one_diagnostic_per_call() {
    let recorder = RecordingObserver::new();
    for n in [3, 1, 4, 1, 5] {
        factorial_with(n, &recorder).unwrap();
    }

    let observed = recorder.snapshot();
    let ns: Vec<i64> = observed.iter().map(|o| o.n).collect();
    assert_eq!(ns, vec![3, 1, 4, 1, 5]);
    assert!(observed
        .windows(2)
        .all(|pair| pair[0].timestamp_ns <= pair[1].timestamp_ns));
}

#[test]
fn test_diagnostic_does_not_change_result() {
    let recorder = RecordingObserver::new();
    assert_eq!(
        factorial_with(30, &recorder).unwrap(),
        factorial_with(30, &NullObserver).unwrap()
    );
}

#[tokio::test]
async fn test_cooperative_agrees_with_iterative() {
    let cooperative = cooperative_factorial(100, &NullObserver).await.unwrap();
    assert_eq!(cooperative, factorial_with(100, &NullObserver).unwrap());
}

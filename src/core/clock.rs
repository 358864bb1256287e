/*!
 * Monotonic Clock
 *
 * Process-wide monotonic nanosecond timestamps and cooperative deadlines.
 * Timestamps are measured from a single anchor captured on first use, so
 * values from different threads are directly comparable.
 */

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use super::types::{Millis, Nanos};

static ANCHOR: OnceLock<Instant> = OnceLock::new();

/// Current monotonic time in nanoseconds since the process anchor
#[inline]
pub fn monotonic_ns() -> Nanos {
    let anchor = ANCHOR.get_or_init(Instant::now);
    anchor.elapsed().as_nanos() as Nanos
}

/// Format an integer with comma thousands separators: `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Absolute point in monotonic time after which work should stop
///
/// Checked cooperatively: nothing is interrupted when it passes, callers
/// poll [`Deadline::has_passed`] between units of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    start: Instant,
    at: Instant,
}

impl Deadline {
    /// Deadline `budget` after now
    pub fn after(budget: Duration) -> Self {
        let start = Instant::now();
        let at = start.checked_add(budget).unwrap_or_else(|| far_future(start));
        Self { start, at }
    }

    /// Deadline `budget_ms` milliseconds after now
    pub fn after_millis(budget_ms: Millis) -> Self {
        Self::after(Duration::from_millis(budget_ms))
    }

    /// True once the monotonic clock has reached the deadline
    #[inline]
    pub fn has_passed(&self) -> bool {
        Instant::now() >= self.at
    }

    /// Time elapsed since the deadline was created
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time left before the deadline, zero once passed
    pub fn remaining(&self) -> Duration {
        self.at.saturating_duration_since(Instant::now())
    }

    /// The configured budget
    pub fn budget(&self) -> Duration {
        self.at - self.start
    }
}

// Instant + u64::MAX ms overflows on most platforms; clamp to ~a century.
fn far_future(start: Instant) -> Instant {
    let century = Duration::from_secs(100 * 365 * 24 * 60 * 60);
    start.checked_add(century).unwrap_or(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_monotonic_ns_never_decreases() {
        let a = monotonic_ns();
        let b = monotonic_ns();
        assert!(b >= a);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(100000), "100,000");
    }

    #[test]
    fn test_deadline_expiration() {
        let deadline = Deadline::after_millis(10);
        assert!(!deadline.has_passed());

        thread::sleep(Duration::from_millis(15));
        assert!(deadline.has_passed());
        assert_eq!(deadline.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_zero_budget_is_already_passed() {
        let deadline = Deadline::after_millis(0);
        assert!(deadline.has_passed());
    }

    #[test]
    fn test_huge_budget_does_not_overflow() {
        let deadline = Deadline::after_millis(u64::MAX);
        assert!(!deadline.has_passed());
        assert!(deadline.remaining() > Duration::from_secs(3600));
    }
}

/*!
 * Ascending Sequence
 * Unbounded, pull-based `start, start+1, start+2, ...`
 */

use std::iter::FusedIterator;

/// Lazy ascending integer cursor
///
/// Each call to `next` produces the current value and advances the cursor.
/// The only way the sequence ends is by reaching `i64::MAX`, which is the
/// last value produced.
#[derive(Debug, Clone)]
pub struct AscendingFrom {
    next: Option<i64>,
}

impl AscendingFrom {
    pub fn new(start: i64) -> Self {
        Self { next: Some(start) }
    }

    /// The value the next call to `next` will produce
    pub fn peek(&self) -> Option<i64> {
        self.next
    }
}

impl Iterator for AscendingFrom {
    type Item = i64;

    #[inline]
    fn next(&mut self) -> Option<i64> {
        let current = self.next?;
        self.next = current.checked_add(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(current) = self.next else {
            return (0, Some(0));
        };
        let remaining = i64::MAX as i128 - current as i128 + 1;
        match usize::try_from(remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for AscendingFrom {}

/// `start, start+1, start+2, ...` produced on demand
pub fn ascending_from(start: i64) -> AscendingFrom {
    AscendingFrom::new(start)
}

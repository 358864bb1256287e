/*!
 * Time-Bounded Consumer
 *
 * Passes elements through until a monotonic deadline passes. The clock starts
 * on the first pull. The deadline is checked after each element has been
 * produced by the source and before it is handed on, so the element whose
 * computation crossed the deadline is dropped. Nothing is interrupted
 * mid-element: the budget bounds completed elements, and total elapsed time
 * may exceed it by one element's compute time.
 */

use crate::core::{Deadline, Millis};
use std::iter::FusedIterator;
use std::time::Duration;

/// Iterator adaptor that ends once its deadline has passed
#[derive(Debug, Clone)]
pub struct TakeUntilTimeout<S> {
    source: S,
    budget: Duration,
    deadline: Option<Deadline>,
    yielded: u64,
    expired: bool,
    exhausted: bool,
}

impl<S> TakeUntilTimeout<S> {
    pub fn new(source: S, budget: Duration) -> Self {
        Self {
            source,
            budget,
            deadline: None,
            yielded: 0,
            expired: false,
            exhausted: false,
        }
    }

    /// Number of elements handed to the consumer so far
    pub fn yielded(&self) -> u64 {
        self.yielded
    }

    /// True once the deadline stopped the sequence
    pub fn expired(&self) -> bool {
        self.expired
    }

    /// True once the source itself ran out
    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    /// Time since the first pull, zero before it
    pub fn elapsed(&self) -> Duration {
        self.deadline
            .as_ref()
            .map_or(Duration::ZERO, Deadline::elapsed)
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// The running deadline, once the first pull has started the clock
    pub fn deadline(&self) -> Option<&Deadline> {
        self.deadline.as_ref()
    }
}

impl<S: Iterator> Iterator for TakeUntilTimeout<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.expired || self.exhausted {
            return None;
        }
        let budget = self.budget;
        let deadline = *self.deadline.get_or_insert_with(|| Deadline::after(budget));

        let Some(value) = self.source.next() else {
            self.exhausted = true;
            return None;
        };
        if deadline.has_passed() {
            self.expired = true;
            return None;
        }
        self.yielded += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.expired || self.exhausted {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<S: Iterator> FusedIterator for TakeUntilTimeout<S> {}

/// End `source` once `budget_ms` milliseconds have elapsed
///
/// The clock starts when the first element is requested.
pub fn take_until_timeout<S>(source: S, budget_ms: Millis) -> TakeUntilTimeout<S::IntoIter>
where
    S: IntoIterator,
{
    TakeUntilTimeout::new(source.into_iter(), Duration::from_millis(budget_ms))
}

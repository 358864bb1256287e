/*!
 * Lazy Sequences
 *
 * Pull-based building blocks for the factorial pipelines:
 * - `ascending_from`: unbounded integer cursor
 * - `map_sequence`: element-wise lazy transform
 * - `take_until_timeout`: cooperative, deadline-bounded prefix
 */

mod ascending;
mod map;
mod timeout;

pub use ascending::{ascending_from, AscendingFrom};
pub use map::{map_sequence, MapSequence};
pub use timeout::{take_until_timeout, TakeUntilTimeout};

use crate::core::Millis;

/// Method-call form of the sequence combinators
pub trait SequenceExt: Iterator + Sized {
    /// See [`map_sequence`]
    fn map_sequence<F, U>(self, f: F) -> MapSequence<Self, F>
    where
        F: FnMut(Self::Item) -> U,
    {
        MapSequence::new(f, self)
    }

    /// See [`take_until_timeout`]
    fn take_until_timeout(self, budget_ms: Millis) -> TakeUntilTimeout<Self> {
        take_until_timeout(self, budget_ms)
    }
}

impl<I: Iterator> SequenceExt for I {}

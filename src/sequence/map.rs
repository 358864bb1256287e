/*!
 * Lazy Transform
 * Applies a function to each pulled element, one at a time
 */

use std::fmt;
use std::iter::FusedIterator;

/// Yields `f(x)` for each `x` pulled from the source
///
/// Exactly one source element is pulled per yielded element and `f` runs
/// only when the consumer asks for the next value.
#[derive(Clone)]
pub struct MapSequence<S, F> {
    source: S,
    f: F,
}

impl<S, F> MapSequence<S, F> {
    pub fn new(f: F, source: S) -> Self {
        Self { source, f }
    }

    /// Recover the source and the function
    pub fn into_parts(self) -> (S, F) {
        (self.source, self.f)
    }
}

impl<S: fmt::Debug, F> fmt::Debug for MapSequence<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapSequence")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<S, F, U> Iterator for MapSequence<S, F>
where
    S: Iterator,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        let x = self.source.next()?;
        Some((self.f)(x))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S, F, U> FusedIterator for MapSequence<S, F>
where
    S: FusedIterator,
    F: FnMut(S::Item) -> U,
{
}

/// Lazily apply `f` to every element of `source`, in order
pub fn map_sequence<S, F, U>(f: F, source: S) -> MapSequence<S::IntoIter, F>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    MapSequence::new(f, source.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_preserves_order_and_finiteness() {
        let doubled: Vec<i32> = map_sequence(|x| x * 2, vec![1, 2, 3]).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
    }

    #[test]
    fn test_no_evaluation_before_pull() {
        let calls = Cell::new(0);
        let mut seq = map_sequence(
            |x: i32| {
                calls.set(calls.get() + 1);
                x
            },
            0..,
        );
        assert_eq!(calls.get(), 0);
        seq.next();
        seq.next();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_pulls_one_source_element_per_output() {
        let mut seq = map_sequence(|x: i32| x + 100, 0..10);
        seq.next();
        let (mut rest, _) = seq.into_parts();
        assert_eq!(rest.next(), Some(1));
    }
}

/*!
 * Cumulative Average
 *
 * Keeps a running sum and count and recomputes the mean after every value.
 * Averaging nothing is an error (`DivideByZero`), never NaN or zero.
 */

use crate::core::{ComputeError, ComputeResult};
use tracing::trace;

/// Running sum/count accumulator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CumulativeAverage {
    total: f64,
    count: u64,
    average: Option<f64>,
}

impl CumulativeAverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one value in and return the updated average
    pub fn push(&mut self, value: f64) -> f64 {
        self.count += 1;
        self.total += value;
        let average = self.total / self.count as f64;
        self.average = Some(average);
        trace!(count = self.count, value, average, "cumulative average updated");
        average
    }

    /// Last computed average
    pub fn average(&self) -> ComputeResult<f64> {
        self.average.ok_or(ComputeError::DivideByZero)
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

impl Extend<f64> for CumulativeAverage {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Average of `values`, computed as a running mean
///
/// Returns [`ComputeError::DivideByZero`] if `values` is empty.
pub fn cumulative_average<I>(values: I) -> ComputeResult<f64>
where
    I: IntoIterator,
    I::Item: Into<f64>,
{
    let mut acc = CumulativeAverage::new();
    acc.extend(values.into_iter().map(Into::<f64>::into));
    acc.average()
}

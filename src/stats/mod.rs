/*!
 * Statistics
 * Running (cumulative) arithmetic mean over a finite sequence
 */

mod cumulative;

pub use cumulative::{cumulative_average, CumulativeAverage};

/*!
 * Factorials
 * Arbitrary-precision factorial with per-call timing diagnostics
 */

mod compute;
mod cooperative;
mod observer;

pub use compute::{factorial, factorial_with};
pub use cooperative::cooperative_factorial;
pub use observer::{
    FactorialObserver, NullObserver, Observation, RecordingObserver, TracingObserver,
};

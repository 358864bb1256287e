/*!
 * Drivers
 *
 * Ways of consuming the factorial pipeline:
 * - bounded: until a cooperative deadline passes
 * - harness: several bounded runs on detached threads
 * - unbounded: forever (or up to a cap)
 * - interleaved: two cooperative async factorials on one task
 */

mod bounded;
mod harness;
mod interleaved;
mod unbounded;

pub use bounded::{run_bounded_factorials, run_bounded_factorials_with, BoundedRun};
pub use harness::{run_concurrent_factorials, ConcurrentHarness, LaunchedWorkers};
pub use interleaved::{run_interleaved, run_interleaved_with};
pub use unbounded::{run_unbounded, run_unbounded_with};

/*!
 * Core Types
 * Common types used across the crate
 */

/// Monotonic timestamp in nanoseconds since the process anchor
pub type Nanos = u64;

/// Time budget in milliseconds
pub type Millis = u64;

/// Common result type for computations
pub type ComputeResult<T> = Result<T, super::errors::ComputeError>;

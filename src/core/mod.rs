/*!
 * Core Module
 * Fundamental types, clock and error handling
 */

pub mod clock;
pub mod errors;
pub mod types;

// Re-export for convenience
pub use clock::{group_thousands, monotonic_ns, Deadline};
pub use errors::*;
pub use types::*;

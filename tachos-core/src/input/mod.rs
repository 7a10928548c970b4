//! Digital input handling
//!
//! Falling-edge detection over periodically sampled, active-low inputs and
//! the object counter built on top of it.

pub mod counter;
pub mod edge;

#[cfg(test)]
pub(crate) mod mock;

pub use counter::{CountOutcome, DetectionCounter};
pub use edge::EdgeDetector;

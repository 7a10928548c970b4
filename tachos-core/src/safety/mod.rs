//! Safety handling
//!
//! The emergency latch is the only component allowed to set or clear the
//! emergency flag, and the only one allowed to override other writers.

pub mod latch;

pub use latch::{EmergencyLatch, LatchEvent, LatchState};

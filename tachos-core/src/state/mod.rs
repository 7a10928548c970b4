//! Shared control state
//!
//! The scalars every task reads and writes, plus a point-in-time view of
//! them for logging.

pub mod shared;

pub use shared::{SharedState, Snapshot};

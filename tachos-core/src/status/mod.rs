//! Status output
//!
//! Renders the shared state as the one-line status report and serializes
//! concurrent writers onto a single output.

pub mod line;
pub mod sink;

pub use line::{render, StatusLine, STATUS_LINE_CAPACITY};
pub use sink::{SinkError, StatusSink};

//! Shared controller state
//!
//! The control scalars and the status sink live in statics so every task,
//! on every executor, reaches the same instance.

use tachos_core::state::SharedState;
use tachos_core::status::StatusSink;
use tachos_core::traits::StatusWriter;

/// Control scalars read and written by all tasks
pub static SHARED: SharedState = SharedState::new();

/// Serialized status output
pub static STATUS: StatusSink<DefmtWriter> = StatusSink::new();

/// Status lines over the defmt transport
pub struct DefmtWriter;

impl StatusWriter for DefmtWriter {
    fn write_line(&mut self, line: &str) {
        defmt::println!("{=str}", line);
    }
}

//! Task scheduling
//!
//! The fixed task table (periods and priorities) shared by the firmware
//! and the deterministic host control loop used in tests.

pub mod cycle;
pub mod task;

pub use cycle::{ControlLoop, FrameInputs, FrameReport, FRAME_MS};
pub use task::{TaskId, TaskSpec, CONTROL_TASKS, ENCODER_SENSE_REPORT_EVERY, TASKS};

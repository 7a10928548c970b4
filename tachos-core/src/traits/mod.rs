//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and the
//! board. Digital inputs use `embedded_hal::digital::InputPin` directly.

pub mod analog;
pub mod status;

pub use analog::{AnalogInput, SensorError};
pub use status::StatusWriter;

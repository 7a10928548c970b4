//! Speed control
//!
//! Potentiometer acquisition (filter + mapping) and the slew-limited ramp
//! that turns the target speed into the motor value.

pub mod filter;
pub mod ramp;

pub use filter::{map_to_speed, SpeedAcquisition, SpeedFilter};
pub use ramp::{RampController, RampLimiter, RampOutput};

//! Ramp controller
//!
//! Moves the motor value toward the target speed by at most `step` RPM per
//! tick, snapping onto the target once within one step. The step is a hard
//! slew cap; the only way the motor moves faster is the emergency latch
//! writing zero directly.
//!
//! The shared `motor` value is the ramp's starting point on every tick,
//! so a zero written by the latch is where the ramp resumes from after
//! release.

use crate::state::SharedState;

/// Slew-rate limiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampLimiter {
    step: u16,
}

impl RampLimiter {
    /// Create a limiter allowing at most `step` RPM per tick
    pub const fn new(step: u16) -> Self {
        Self { step }
    }

    /// Next value on the way from `current` to `target`
    pub fn advance(&self, current: u16, target: u16) -> u16 {
        let step = self.step as i32;
        let diff = target as i32 - current as i32;

        if diff > step {
            current + self.step
        } else if diff < -step {
            current - self.step
        } else {
            target
        }
    }
}

/// Values published by one ramp tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RampOutput {
    /// Target read at the start of the tick
    pub target: u16,
    /// Motor value published (also the measured speed)
    pub motor: u16,
}

/// Ramp task state
#[derive(Debug, Clone)]
pub struct RampController {
    limiter: RampLimiter,
}

impl RampController {
    /// Create a ramp controller with the given slew cap
    pub const fn new(step: u16) -> Self {
        Self {
            limiter: RampLimiter::new(step),
        }
    }

    /// Advance the motor one step and publish motor and measured speed
    ///
    /// Runs whether or not the latch is set. The latch is checked last,
    /// right before publishing, and a latched tick always publishes zero.
    pub fn tick(&mut self, shared: &SharedState) -> RampOutput {
        let target = shared.target_speed();
        let current = shared.motor();

        let motor = if shared.emergency_latched() {
            0
        } else {
            self.limiter.advance(current, target)
        };

        shared.set_motor(motor);
        shared.set_measured_speed(motor);

        RampOutput { target, motor }
    }
}

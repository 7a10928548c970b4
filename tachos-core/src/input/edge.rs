//! Falling-edge detector
//!
//! Inputs are wired active-low with a pull-up: released reads high,
//! pressed/detected reads low. A falling edge is one sample high followed
//! by one sample low.
//!
//! With `stable_samples == 1` the sample period is the only debounce
//! window. Larger values require the new level to be seen on that many
//! consecutive samples before it is accepted.

use embedded_hal::digital::InputPin;

/// Debounced falling-edge detector
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeDetector {
    /// Last accepted level (true = high)
    level: bool,
    /// Level currently being qualified
    candidate: bool,
    /// Consecutive samples at `candidate`
    run: u8,
    /// Samples required to accept a level change
    stable_samples: u8,
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new(1)
    }
}

impl EdgeDetector {
    /// Create a detector
    ///
    /// History starts low, so an input already held low at boot does not
    /// produce an edge. `stable_samples` of 0 is treated as 1.
    pub const fn new(stable_samples: u8) -> Self {
        Self {
            level: false,
            candidate: false,
            run: 0,
            stable_samples: if stable_samples == 0 { 1 } else { stable_samples },
        }
    }

    /// Feed one sample, returning true on a qualifying falling edge
    pub fn update(&mut self, high: bool) -> bool {
        if high == self.candidate {
            self.run = self.run.saturating_add(1);
        } else {
            self.candidate = high;
            self.run = 1;
        }

        if self.run >= self.stable_samples && self.candidate != self.level {
            let falling = self.level && !self.candidate;
            self.level = self.candidate;
            return falling;
        }

        false
    }

    /// Sample a pin and feed the level
    ///
    /// A read error counts as released (high), which can never complete a
    /// falling edge.
    pub fn poll<P: InputPin>(&mut self, pin: &mut P) -> bool {
        let high = pin.is_high().unwrap_or(true);
        self.update(high)
    }

    /// Last accepted level
    pub fn level(&self) -> bool {
        self.level
    }
}

//! Hardware configuration types
//!
//! Pin assignments for the two digital sensors and the potentiometer.

/// Pin configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (pressed/detected reads as 0)
    pub active_low: bool,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a plain pin config (analog or active-high input)
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            active_low: false,
            pull_up: false,
        }
    }

    /// Create an active-low input with the internal pull-up enabled
    pub const fn active_low_pullup(pin: u8) -> Self {
        Self {
            pin,
            active_low: true,
            pull_up: true,
        }
    }

    /// Whether a sampled level means the input is asserted
    pub fn is_asserted(&self, high: bool) -> bool {
        high != self.active_low
    }
}

/// Board pin map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardPins {
    /// Object-counting sensor
    pub counting: PinConfig,
    /// Emergency stop button
    pub emergency: PinConfig,
    /// Potentiometer wiper (must be an ADC-capable pin)
    pub potentiometer: PinConfig,
}

impl BoardPins {
    /// Reference wiring
    pub const REFERENCE: Self = Self {
        counting: PinConfig::active_low_pullup(14),
        emergency: PinConfig::active_low_pullup(15),
        potentiometer: PinConfig::new(26),
    };

    /// All GPIO numbers in use, for conflict checks
    pub fn gpios(&self) -> [u8; 3] {
        [self.counting.pin, self.emergency.pin, self.potentiometer.pin]
    }
}

impl Default for BoardPins {
    fn default() -> Self {
        Self::REFERENCE
    }
}

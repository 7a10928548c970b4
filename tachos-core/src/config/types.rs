//! Controller constants
//!
//! The reference configuration mirrors the bench rig: a 12-bit ADC on the
//! potentiometer, a 0-6000 RPM target range and a 100 RPM-per-tick ramp.

/// Full-scale raw ADC reading (12-bit)
pub const RAW_MAX: u16 = 4095;

/// Maximum target speed in RPM
pub const MAX_SPEED: u16 = 6000;

/// Maximum motor change per ramp tick in RPM
pub const RAMP_STEP: u16 = 100;

/// Filter gain numerator (gain = 1/4)
pub const FILTER_GAIN_NUM: i32 = 1;

/// Filter gain denominator
pub const FILTER_GAIN_DEN: i32 = 4;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Filter gain denominator is zero
    ZeroGainDenominator,
    /// Filter gain is outside (0, 1]
    InvalidGain,
    /// Ramp step is zero (motor could never move)
    ZeroRampStep,
    /// Raw ADC range or speed range is zero
    ZeroRange,
    /// Debounce window must be at least one sample
    ZeroDebounce,
}

/// Controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerConfig {
    /// Full-scale target speed (RPM)
    pub max_speed: u16,
    /// Full-scale raw analog sample
    pub raw_max: u16,
    /// Exponential filter gain numerator
    pub filter_gain_num: i32,
    /// Exponential filter gain denominator
    pub filter_gain_den: i32,
    /// Hard cap on motor change per ramp tick
    pub ramp_step: u16,
    /// Consecutive identical samples before a digital level is accepted
    ///
    /// 1 reproduces plain periodic sampling, where the tick period is the
    /// only debounce window.
    pub debounce_samples: u8,
}

impl ControllerConfig {
    /// Reference configuration
    pub const REFERENCE: Self = Self {
        max_speed: MAX_SPEED,
        raw_max: RAW_MAX,
        filter_gain_num: FILTER_GAIN_NUM,
        filter_gain_den: FILTER_GAIN_DEN,
        ramp_step: RAMP_STEP,
        debounce_samples: 1,
    };

    /// Check that the constants describe a controller that can converge
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.filter_gain_den == 0 {
            return Err(ConfigError::ZeroGainDenominator);
        }
        if self.filter_gain_num <= 0 || self.filter_gain_num > self.filter_gain_den {
            return Err(ConfigError::InvalidGain);
        }
        if self.ramp_step == 0 {
            return Err(ConfigError::ZeroRampStep);
        }
        if self.raw_max == 0 || self.max_speed == 0 {
            return Err(ConfigError::ZeroRange);
        }
        if self.debounce_samples == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        Ok(())
    }

    /// Ramp ticks needed to sweep the full speed range
    pub fn full_sweep_ticks(&self) -> u32 {
        (self.max_speed as u32).div_ceil(self.ramp_step.max(1) as u32)
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_is_valid() {
        assert_eq!(ControllerConfig::REFERENCE.validate(), Ok(()));
        assert_eq!(ControllerConfig::default(), ControllerConfig::REFERENCE);
    }

    #[test]
    fn test_rejects_bad_gain() {
        let mut config = ControllerConfig::REFERENCE;
        config.filter_gain_den = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroGainDenominator));

        config.filter_gain_den = 4;
        config.filter_gain_num = 5;
        assert_eq!(config.validate(), Err(ConfigError::InvalidGain));

        config.filter_gain_num = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidGain));
    }

    #[test]
    fn test_rejects_zero_step_and_range() {
        let mut config = ControllerConfig::REFERENCE;
        config.ramp_step = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroRampStep));

        let mut config = ControllerConfig::REFERENCE;
        config.raw_max = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroRange));

        let mut config = ControllerConfig::REFERENCE;
        config.debounce_samples = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDebounce));
    }

    #[test]
    fn test_full_sweep_ticks() {
        assert_eq!(ControllerConfig::REFERENCE.full_sweep_ticks(), 60);

        let mut config = ControllerConfig::REFERENCE;
        config.ramp_step = 7;
        assert_eq!(config.full_sweep_ticks(), 858); // 6000 / 7 rounded up
    }
}

//! ADC channel mapping and the potentiometer input
//!
//! RP2040 has a single ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor

use embassy_rp::adc::{Adc, Async, Channel};

use tachos_core::traits::{AnalogInput, SensorError};

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
    /// Internal temperature sensor
    Temperature,
}

impl AdcChannel {
    /// GPIO pin for this channel
    pub fn gpio(&self) -> Option<u8> {
        match self {
            AdcChannel::Adc0 => Some(26),
            AdcChannel::Adc1 => Some(27),
            AdcChannel::Adc2 => Some(28),
            AdcChannel::Adc3 => Some(29),
            AdcChannel::Temperature => None,
        }
    }

    /// Channel wired to a GPIO pin, if any
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            26 => Some(AdcChannel::Adc0),
            27 => Some(AdcChannel::Adc1),
            28 => Some(AdcChannel::Adc2),
            29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }
}

/// Potentiometer wiper on one ADC channel
///
/// Samples are the ADC's native 12-bit width, so `raw_max` is 4095.
pub struct PotInput<'d> {
    adc: Adc<'d, Async>,
    channel: Channel<'d>,
}

impl<'d> PotInput<'d> {
    /// Create a potentiometer input on `channel`
    pub fn new(adc: Adc<'d, Async>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for PotInput<'_> {
    async fn read_raw(&mut self) -> Result<u16, SensorError> {
        self.adc
            .read(&mut self.channel)
            .await
            .map_err(|_| SensorError::ConversionError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpio_mapping_round_trips() {
        for ch in [AdcChannel::Adc0, AdcChannel::Adc1, AdcChannel::Adc2, AdcChannel::Adc3] {
            let gpio = ch.gpio().unwrap();
            assert_eq!(AdcChannel::from_gpio(gpio), Some(ch));
        }
        assert_eq!(AdcChannel::Temperature.gpio(), None);
        assert_eq!(AdcChannel::from_gpio(25), None);
    }
}

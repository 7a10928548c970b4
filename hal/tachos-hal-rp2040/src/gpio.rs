//! GPIO reservation
//!
//! Tracks which GPIO pins are in use so the board pin map cannot assign
//! one pin to two inputs.

use heapless::FnvIndexSet;

use tachos_core::config::BoardPins;

use crate::adc::AdcChannel;

/// Number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Pin reservation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number does not exist on this chip
    OutOfRange(u8),
    /// Pin already reserved
    InUse(u8),
    /// Pin has no ADC channel
    NotAnalog(u8),
}

/// Tracks reserved GPIO pins
pub struct GpioAllocator {
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create an allocator with no pins reserved
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Reserve a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if pin as usize >= GPIO_COUNT {
            return Err(PinError::OutOfRange(pin));
        }
        if self.allocated.contains(&pin) {
            return Err(PinError::InUse(pin));
        }
        // Capacity exceeds GPIO_COUNT
        self.allocated.insert(pin).map_err(|_| PinError::OutOfRange(pin))?;
        Ok(())
    }

    /// Number of reserved pins
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

/// Reserve every pin of the board map
///
/// Fails on the first duplicate or out-of-range pin, or when the
/// potentiometer is not on an ADC-capable pin.
pub fn reserve_board_pins(pins: &BoardPins) -> Result<(GpioAllocator, AdcChannel), PinError> {
    let mut alloc = GpioAllocator::new();
    for pin in pins.gpios() {
        alloc.allocate(pin)?;
    }

    let pot = pins.potentiometer.pin;
    let channel = AdcChannel::from_gpio(pot).ok_or(PinError::NotAnalog(pot))?;
    Ok((alloc, channel))
}

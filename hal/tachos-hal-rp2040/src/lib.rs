//! RP2040 bindings for the speed controller
//!
//! Implements the `tachos-core` hardware traits on embassy-rp peripherals:
//!
//! - GPIO reservation for the board pin map
//! - ADC channel mapping and the potentiometer input

#![no_std]

pub mod adc;
pub mod gpio;

pub use adc::{AdcChannel, PotInput};
pub use gpio::{reserve_board_pins, GpioAllocator, PinError};

//! Board-agnostic core logic for the motor speed controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Shared control state and its consistency contract
//! - Potentiometer filter and target-speed mapping
//! - Debounced falling-edge detection and the detection counter
//! - Emergency latch (safety state machine)
//! - Slew-limited ramp controller
//! - Status line rendering and the serialized logging sink
//! - Task table and a deterministic host-side control loop

#![no_std]
#![deny(unsafe_code)]

// Host tests (and proptest's macros) need std
#[cfg(test)]
#[macro_use]
extern crate std;

pub mod config;
pub mod control;
pub mod input;
pub mod safety;
pub mod scheduler;
pub mod state;
pub mod status;
pub mod traits;

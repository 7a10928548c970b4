//! Shared state container
//!
//! # Consistency contract
//!
//! Each field is a single machine word accessed with relaxed atomic loads
//! and stores. There is no transaction across fields: a task reading
//! `target_speed` and `emergency_latched` back to back may observe values
//! written in two different scheduling ticks. The control loop tolerates
//! one tick of staleness (at most one 50 ms control period).
//!
//! Writers by field:
//!
//! | field               | writers                                   |
//! |---------------------|-------------------------------------------|
//! | `measured_speed`    | ramp controller                           |
//! | `target_speed`      | acquisition (unlatched), latch (zero)     |
//! | `emergency_latched` | latch only                                |
//! | `motor`             | ramp controller, latch (zero)             |
//! | `detection_count`   | counting detector only                    |
//!
//! Ownership is by convention. The setters are public so each component
//! can write its own fields; nothing stops a misbehaving caller.

use portable_atomic::{AtomicBool, AtomicU16, AtomicU32, Ordering};

/// Process-wide control scalars
#[derive(Debug)]
pub struct SharedState {
    measured_speed: AtomicU16,
    target_speed: AtomicU16,
    emergency_latched: AtomicBool,
    motor: AtomicU16,
    detection_count: AtomicU32,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    /// Create the shared state; all fields start at zero / false
    pub const fn new() -> Self {
        Self {
            measured_speed: AtomicU16::new(0),
            target_speed: AtomicU16::new(0),
            emergency_latched: AtomicBool::new(false),
            motor: AtomicU16::new(0),
            detection_count: AtomicU32::new(0),
        }
    }

    /// Get the measured speed (RPM)
    pub fn measured_speed(&self) -> u16 {
        self.measured_speed.load(Ordering::Relaxed)
    }

    /// Set the measured speed (RPM)
    pub fn set_measured_speed(&self, rpm: u16) {
        self.measured_speed.store(rpm, Ordering::Relaxed);
    }

    /// Get the target speed (RPM)
    pub fn target_speed(&self) -> u16 {
        self.target_speed.load(Ordering::Relaxed)
    }

    /// Set the target speed (RPM)
    pub fn set_target_speed(&self, rpm: u16) {
        self.target_speed.store(rpm, Ordering::Relaxed);
    }

    /// Check if the emergency stop is latched
    pub fn emergency_latched(&self) -> bool {
        self.emergency_latched.load(Ordering::Relaxed)
    }

    /// Set the emergency flag
    ///
    /// Only the emergency latch may call this.
    pub fn set_emergency_latched(&self, latched: bool) {
        self.emergency_latched.store(latched, Ordering::Relaxed);
    }

    /// Get the motor command (RPM)
    pub fn motor(&self) -> u16 {
        self.motor.load(Ordering::Relaxed)
    }

    /// Set the motor command (RPM)
    pub fn set_motor(&self, rpm: u16) {
        self.motor.store(rpm, Ordering::Relaxed);
    }

    /// Get the number of objects counted
    pub fn detection_count(&self) -> u32 {
        self.detection_count.load(Ordering::Relaxed)
    }

    /// Increment the detection counter, returning the new total
    ///
    /// Only the counting detector may call this; a single writer is what
    /// keeps the counter monotonic.
    pub fn increment_detection_count(&self) -> u32 {
        self.detection_count
            .fetch_add(1, Ordering::Relaxed)
            .wrapping_add(1)
    }

    /// Force target and motor to zero
    ///
    /// Used by the emergency latch on engage and on every latched tick.
    pub fn force_stop(&self) {
        self.set_target_speed(0);
        self.set_motor(0);
    }

    /// Read every field once
    ///
    /// Fields are read one after another, so the snapshot may straddle a
    /// write from a preempting task.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            measured_speed: self.measured_speed(),
            target_speed: self.target_speed(),
            motor: self.motor(),
            detection_count: self.detection_count(),
            emergency_latched: self.emergency_latched(),
        }
    }
}

/// Point-in-time copy of the shared state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub measured_speed: u16,
    pub target_speed: u16,
    pub motor: u16,
    pub detection_count: u32,
    pub emergency_latched: bool,
}

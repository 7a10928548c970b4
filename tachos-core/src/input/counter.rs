//! Detection counter
//!
//! Counts falling edges on the object sensor while the emergency latch is
//! clear. Edges seen while latched are dropped, not deferred.

use embedded_hal::digital::InputPin;

use crate::state::SharedState;

use super::edge::EdgeDetector;

/// Result of one counter tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountOutcome {
    /// No edge this tick
    Idle,
    /// Edge counted; carries the new total
    Counted(u32),
    /// Edge seen while latched and discarded
    Suppressed,
}

/// Object-counting sensor task state
#[derive(Debug, Clone, Default)]
pub struct DetectionCounter {
    edge: EdgeDetector,
}

impl DetectionCounter {
    /// Create a counter whose detector needs `stable_samples` to accept a level
    pub const fn new(stable_samples: u8) -> Self {
        Self {
            edge: EdgeDetector::new(stable_samples),
        }
    }

    /// Process one sample of the counting input
    ///
    /// The edge history advances on every tick, latched or not.
    pub fn tick(&mut self, high: bool, shared: &SharedState) -> CountOutcome {
        let edge = self.edge.update(high);
        self.count(edge, shared)
    }

    /// Sample the counting pin and process it
    ///
    /// A failed read counts as released.
    pub fn poll<P: InputPin>(&mut self, pin: &mut P, shared: &SharedState) -> CountOutcome {
        let edge = self.edge.poll(pin);
        self.count(edge, shared)
    }

    fn count(&self, edge: bool, shared: &SharedState) -> CountOutcome {
        if !edge {
            return CountOutcome::Idle;
        }

        if shared.emergency_latched() {
            CountOutcome::Suppressed
        } else {
            CountOutcome::Counted(shared.increment_detection_count())
        }
    }
}

//! Emergency latch
//!
//! Toggle-on-edge state machine over the emergency button:
//!
//! ```text
//!            falling edge
//!   Clear ─────────────────▶ Latched ──┐ no edge: force zero again
//!     ▲                         │  ◀───┘
//!     └─────────────────────────┘
//!            falling edge
//! ```
//!
//! Entering `Latched` forces target and motor to zero in the same tick,
//! bypassing the ramp. Every latched tick re-applies the zero so a writer
//! that raced the latch cannot leave the motor running. The tick that
//! releases the latch does not force zero, so acquisition resumes on its
//! next tick.
//!
//! The same button both arms and disarms. There is no separate reset input.

use embedded_hal::digital::InputPin;

use crate::input::EdgeDetector;
use crate::state::SharedState;

/// Latch states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchState {
    /// Normal operation
    #[default]
    Clear,
    /// Emergency stop in force
    Latched,
}

/// What a latch tick did to the shared state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LatchEvent {
    /// Clear → Latched; target and motor forced to zero
    Engaged,
    /// Latched → Latched; force-zero re-applied
    Held,
    /// Latched → Clear; flag cleared, no force this tick
    Released,
}

impl LatchState {
    /// Process one tick and return the next state
    ///
    /// `edge` is whether the emergency input produced a qualifying falling
    /// edge on this tick.
    pub fn transition(self, edge: bool) -> (Self, Option<LatchEvent>) {
        use LatchEvent::*;
        use LatchState::*;

        match (self, edge) {
            (Clear, true) => (Latched, Some(Engaged)),
            (Clear, false) => (Clear, None),
            (Latched, true) => (Clear, Some(Released)),
            (Latched, false) => (Latched, Some(Held)),
        }
    }

    /// Check if the emergency stop is in force
    pub fn is_latched(&self) -> bool {
        matches!(self, LatchState::Latched)
    }
}

/// Emergency latch task state
#[derive(Debug, Clone, Default)]
pub struct EmergencyLatch {
    edge: EdgeDetector,
    state: LatchState,
}

impl EmergencyLatch {
    /// Create a clear latch whose detector needs `stable_samples` to accept a level
    pub const fn new(stable_samples: u8) -> Self {
        Self {
            edge: EdgeDetector::new(stable_samples),
            state: LatchState::Clear,
        }
    }

    /// Current latch state
    pub fn state(&self) -> LatchState {
        self.state
    }

    /// Process one sample of the emergency input and apply the effect
    pub fn tick(&mut self, high: bool, shared: &SharedState) -> Option<LatchEvent> {
        let edge = self.edge.update(high);
        self.apply(edge, shared)
    }

    /// Sample the emergency pin and apply the effect
    ///
    /// A failed read counts as released, so it can neither engage nor
    /// release the latch.
    pub fn poll<P: InputPin>(&mut self, pin: &mut P, shared: &SharedState) -> Option<LatchEvent> {
        let edge = self.edge.poll(pin);
        self.apply(edge, shared)
    }

    fn apply(&mut self, edge: bool, shared: &SharedState) -> Option<LatchEvent> {
        let (next, event) = self.state.transition(edge);
        self.state = next;

        match event {
            Some(LatchEvent::Engaged) | Some(LatchEvent::Held) => {
                // Flag first: a writer re-checking before its publish sees it
                shared.set_emergency_latched(true);
                shared.force_stop();
            }
            Some(LatchEvent::Released) => shared.set_emergency_latched(false),
            None => {}
        }

        event
    }
}

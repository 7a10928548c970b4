//! Deterministic control loop
//!
//! Runs the four control tasks against a simulated clock in fixed 10 ms
//! frames. Within a frame every due task runs once, highest priority
//! first, which is the order a preemptive fixed-priority scheduler
//! produces when several periods expire together.
//!
//! Used by host tests to check whole-system behavior without an executor.

use heapless::Vec;

use crate::config::ControllerConfig;
use crate::control::{RampController, RampOutput, SpeedAcquisition};
use crate::input::{CountOutcome, DetectionCounter};
use crate::safety::{EmergencyLatch, LatchEvent};
use crate::state::SharedState;

use super::task::{TaskId, CONTROL_TASKS};

/// Simulated time per frame (the fastest control period)
pub const FRAME_MS: u32 = 10;

/// Input levels for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameInputs {
    /// Raw potentiometer sample
    pub pot_raw: u16,
    /// Counting sensor level (true = released)
    pub count_high: bool,
    /// Emergency button level (true = released)
    pub emergency_high: bool,
}

impl Default for FrameInputs {
    fn default() -> Self {
        Self {
            pot_raw: 0,
            count_high: true,
            emergency_high: true,
        }
    }
}

/// What happened during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Frame start time
    pub now_ms: u32,
    /// Tasks that ran, in execution order
    pub ran: Vec<TaskId, 4>,
    pub latch: Option<LatchEvent>,
    pub count: Option<CountOutcome>,
    /// Target published by acquisition, if it wrote one
    pub target: Option<u16>,
    pub ramp: Option<RampOutput>,
}

/// All control tasks over one shared state
pub struct ControlLoop {
    shared: SharedState,
    latch: EmergencyLatch,
    counter: DetectionCounter,
    acquisition: SpeedAcquisition,
    ramp: RampController,
    now_ms: u32,
}

impl ControlLoop {
    /// Create a loop at time zero with fresh shared state
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            shared: SharedState::new(),
            latch: EmergencyLatch::new(config.debounce_samples),
            counter: DetectionCounter::new(config.debounce_samples),
            acquisition: SpeedAcquisition::new(config),
            ramp: RampController::new(config.ramp_step),
            now_ms: 0,
        }
    }

    /// Get the shared state the tasks operate on
    pub fn shared(&self) -> &SharedState {
        &self.shared
    }

    /// Start time of the next frame
    pub fn now_ms(&self) -> u32 {
        self.now_ms
    }

    /// Run one frame
    pub fn step(&mut self, inputs: &FrameInputs) -> FrameReport {
        let mut report = FrameReport {
            now_ms: self.now_ms,
            ..FrameReport::default()
        };

        for id in CONTROL_TASKS {
            if !id.is_due(self.now_ms) {
                continue;
            }
            // Capacity equals CONTROL_TASKS.len()
            let _ = report.ran.push(id);

            match id {
                TaskId::Safety => {
                    report.latch = self.latch.tick(inputs.emergency_high, &self.shared);
                }
                TaskId::Ramp => {
                    report.ramp = Some(self.ramp.tick(&self.shared));
                }
                TaskId::Counter => {
                    report.count = Some(self.counter.tick(inputs.count_high, &self.shared));
                }
                TaskId::Speed => {
                    report.target = self.acquisition.tick(&self.shared, || inputs.pot_raw);
                }
                TaskId::EncoderSense => {}
            }
        }

        self.now_ms += FRAME_MS;
        report
    }

    /// Run `frames` frames with constant inputs, returning the last report
    pub fn run(&mut self, frames: u32, inputs: &FrameInputs) -> FrameReport {
        let mut last = FrameReport::default();
        for _ in 0..frames {
            last = self.step(inputs);
        }
        last
    }
}

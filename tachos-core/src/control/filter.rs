//! Potentiometer filter and target mapping
//!
//! The filter runs in the raw ADC domain:
//!
//! ```text
//! state += (raw - state) * num / den      (truncating)
//! target = (state * max_speed + raw_max / 2) / raw_max   clamped
//! ```
//!
//! Truncation alone leaves a dead band of `den / num` counts around the
//! input (with gain 1/4 a full-scale pot settles at 4092, not 4095). When
//! the truncated correction is zero but the input still differs, the state
//! moves one count toward it, so a constant input is always reached.

use crate::config::ControllerConfig;
use crate::state::SharedState;

/// Map a filtered raw value to a target speed, rounding to nearest
///
/// Out-of-range inputs (negative or above `raw_max`) clamp to the ends of
/// the speed range.
pub fn map_to_speed(filtered: i32, max_speed: u16, raw_max: u16) -> u16 {
    let raw_max = (raw_max as i64).max(1);
    let scaled = (filtered as i64 * max_speed as i64 + raw_max / 2) / raw_max;
    scaled.clamp(0, max_speed as i64) as u16
}

/// Integer exponential moving average
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedFilter {
    state: i32,
    gain_num: i32,
    gain_den: i32,
}

impl SpeedFilter {
    /// Create a filter at zero with the configured gain
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            state: 0,
            gain_num: config.filter_gain_num,
            gain_den: config.filter_gain_den.max(1),
        }
    }

    /// Fold one raw sample into the average and return the new state
    pub fn update(&mut self, raw: u16) -> i32 {
        let diff = raw as i32 - self.state;
        let mut delta = diff * self.gain_num / self.gain_den;
        if delta == 0 {
            delta = diff.signum();
        }
        self.state += delta;
        self.state
    }

    /// Current filtered raw value
    pub fn state(&self) -> i32 {
        self.state
    }
}

/// Analog acquisition task state
///
/// Frozen while the emergency latch is set: no sample, no filter update,
/// no target write. Once released, the filter picks up from where it was
/// frozen.
#[derive(Debug, Clone)]
pub struct SpeedAcquisition {
    filter: SpeedFilter,
    max_speed: u16,
    raw_max: u16,
}

impl SpeedAcquisition {
    /// Create an acquisition stage for the configured ranges
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            filter: SpeedFilter::new(config),
            max_speed: config.max_speed,
            raw_max: config.raw_max,
        }
    }

    /// Whether this tick must be skipped entirely
    pub fn is_frozen(&self, shared: &SharedState) -> bool {
        shared.emergency_latched()
    }

    /// Fold a sample and publish the target speed
    ///
    /// Re-checks the latch first: a sample taken while the latch engaged
    /// is discarded without touching the filter. Returns the published
    /// target.
    pub fn update(&mut self, raw: u16, shared: &SharedState) -> Option<u16> {
        if self.is_frozen(shared) {
            return None;
        }

        let filtered = self.filter.update(raw);
        let target = map_to_speed(filtered, self.max_speed, self.raw_max);
        shared.set_target_speed(target);
        Some(target)
    }

    /// Run one tick with a synchronous sampler
    ///
    /// The sampler is not called while frozen.
    pub fn tick<F: FnOnce() -> u16>(&mut self, shared: &SharedState, sample: F) -> Option<u16> {
        if self.is_frozen(shared) {
            return None;
        }
        self.update(sample(), shared)
    }

    /// Filtered raw value (for diagnostics)
    pub fn filtered(&self) -> i32 {
        self.filter.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CONFIG: ControllerConfig = ControllerConfig::REFERENCE;

    #[test]
    fn test_map_endpoints() {
        assert_eq!(map_to_speed(0, 6000, 4095), 0);
        assert_eq!(map_to_speed(4095, 6000, 4095), 6000);
        // (2048 * 6000 + 2047) / 4095 = 3001
        assert_eq!(map_to_speed(2048, 6000, 4095), 3001);
    }

    #[test]
    fn test_map_clamps_out_of_range() {
        assert_eq!(map_to_speed(-50, 6000, 4095), 0);
        assert_eq!(map_to_speed(65535, 6000, 4095), 6000);
    }

    #[test]
    fn test_filter_first_steps_truncate() {
        let mut filter = SpeedFilter::new(&CONFIG);
        assert_eq!(filter.update(4095), 1023); // 4095 / 4
        assert_eq!(filter.update(4095), 1791); // 1023 + 3072 / 4
        assert_eq!(filter.update(4095), 2367); // 1791 + 2304 / 4
    }

    #[test]
    fn test_filter_reaches_constant_input() {
        let mut filter = SpeedFilter::new(&CONFIG);
        for _ in 0..60 {
            filter.update(4095);
        }
        assert_eq!(filter.state(), 4095);

        for _ in 0..60 {
            filter.update(0);
        }
        assert_eq!(filter.state(), 0);
    }

    #[test]
    fn test_acquisition_publishes_target() {
        let shared = SharedState::new();
        let mut acq = SpeedAcquisition::new(&CONFIG);
        let target = acq.update(4095, &shared);
        assert_eq!(target, Some(map_to_speed(1023, 6000, 4095)));
        assert_eq!(shared.target_speed(), target.unwrap());
    }

    #[test]
    fn test_acquisition_frozen_while_latched() {
        let shared = SharedState::new();
        let mut acq = SpeedAcquisition::new(&CONFIG);
        acq.update(2000, &shared);
        let filtered = acq.filtered();

        shared.set_emergency_latched(true);
        shared.set_target_speed(0);

        let mut sampled = false;
        let result = acq.tick(&shared, || {
            sampled = true;
            4095
        });

        assert_eq!(result, None);
        assert!(!sampled);
        assert_eq!(acq.filtered(), filtered);
        assert_eq!(shared.target_speed(), 0);

        // A sample already in flight when the latch engaged is discarded
        assert_eq!(acq.update(4095, &shared), None);
        assert_eq!(acq.filtered(), filtered);
    }

    proptest! {
        #[test]
        fn prop_target_in_range(raws in proptest::collection::vec(any::<u16>(), 1..100)) {
            let shared = SharedState::new();
            let mut acq = SpeedAcquisition::new(&CONFIG);
            for raw in raws {
                let target = acq.update(raw, &shared).unwrap();
                prop_assert!(target <= CONFIG.max_speed);
            }
        }

        #[test]
        fn prop_filter_converges(raw in 0u16..=4095) {
            let mut filter = SpeedFilter::new(&CONFIG);
            for _ in 0..100 {
                filter.update(raw);
            }
            prop_assert_eq!(filter.state(), raw as i32);
        }
    }
}

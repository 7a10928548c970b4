//! Potentiometer acquisition task
//!
//! Lowest control priority. Samples the potentiometer, filters it and
//! publishes the target speed. Skips the whole tick while the emergency
//! latch is set.

use defmt::*;

use tachos_core::config::ControllerConfig;
use tachos_core::control::SpeedAcquisition;
use tachos_core::scheduler::TaskId;
use tachos_core::traits::AnalogInput;
use tachos_hal_rp2040::PotInput;

use super::ticker_for;
use crate::shared::SHARED;

/// Acquisition ticks between diagnostic traces
const TRACE_EVERY: u32 = 10;

#[embassy_executor::task]
pub async fn speed_task(mut pot: PotInput<'static>, config: ControllerConfig) {
    info!("Speed task started");

    let mut acquisition = SpeedAcquisition::new(&config);
    let mut ticker = ticker_for(TaskId::Speed);
    let mut published: u32 = 0;

    loop {
        ticker.next().await;

        if acquisition.is_frozen(&SHARED) {
            continue;
        }

        let raw = match pot.read_raw().await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Potentiometer read failed: {}", e);
                continue;
            }
        };

        // The latch may have engaged during the conversion
        if let Some(target) = acquisition.update(raw, &SHARED) {
            published = published.wrapping_add(1);
            if published % TRACE_EVERY == 0 {
                trace!(
                    "ADC raw={} filt={} target={}",
                    raw,
                    acquisition.filtered(),
                    target
                );
            }
        }
    }
}

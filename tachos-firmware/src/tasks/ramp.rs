//! Motor ramp task
//!
//! Slews the motor toward the target speed and prints one status line
//! per period.

use defmt::*;

use tachos_core::control::RampController;
use tachos_core::scheduler::TaskId;

use super::ticker_for;
use crate::shared::{SHARED, STATUS};

#[embassy_executor::task]
pub async fn ramp_task(ramp_step: u16) {
    info!("Ramp task started (step={} RPM)", ramp_step);

    let mut ramp = RampController::new(ramp_step);
    let mut ticker = ticker_for(TaskId::Ramp);

    loop {
        ticker.next().await;

        let out = ramp.tick(&SHARED);
        trace!("Ramp: target={} motor={}", out.target, out.motor);

        STATUS.publish(&SHARED.snapshot());
    }
}

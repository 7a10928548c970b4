//! Emergency stop task
//!
//! Highest priority. Samples the emergency button every period and drives
//! the latch; engaging it zeroes target and motor before any lower task
//! runs again.

use defmt::*;
use embassy_rp::gpio::Input;

use tachos_core::safety::{EmergencyLatch, LatchEvent};
use tachos_core::scheduler::TaskId;

use super::ticker_for;
use crate::shared::SHARED;

#[embassy_executor::task]
pub async fn safety_task(mut button: Input<'static>, debounce_samples: u8) {
    info!("Safety task started");

    let mut latch = EmergencyLatch::new(debounce_samples);
    let mut ticker = ticker_for(TaskId::Safety);

    loop {
        ticker.next().await;

        match latch.poll(&mut button, &SHARED) {
            Some(LatchEvent::Engaged) => warn!("Emergency stop engaged, motor forced to 0"),
            Some(LatchEvent::Released) => info!("Emergency stop released"),
            Some(LatchEvent::Held) | None => {}
        }
    }
}

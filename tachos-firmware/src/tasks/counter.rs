//! Object counting task

use defmt::*;
use embassy_rp::gpio::Input;

use tachos_core::input::{CountOutcome, DetectionCounter};
use tachos_core::scheduler::TaskId;

use super::ticker_for;
use crate::shared::SHARED;

#[embassy_executor::task]
pub async fn counter_task(mut sensor: Input<'static>, debounce_samples: u8) {
    info!("Counter task started");

    let mut counter = DetectionCounter::new(debounce_samples);
    let mut ticker = ticker_for(TaskId::Counter);

    loop {
        ticker.next().await;

        match counter.poll(&mut sensor, &SHARED) {
            CountOutcome::Counted(total) => debug!("Object detected, total={}", total),
            CountOutcome::Suppressed => debug!("Detection ignored while emergency latched"),
            CountOutcome::Idle => {}
        }
    }
}

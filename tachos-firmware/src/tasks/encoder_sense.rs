//! Motor readback task
//!
//! Fast diagnostic loop; reports the current motor value every
//! `ENCODER_SENSE_REPORT_EVERY` iterations, along with the number of
//! status lines the sink has dropped. Never writes control state.

use defmt::*;

use tachos_core::scheduler::{TaskId, ENCODER_SENSE_REPORT_EVERY};

use super::ticker_for;
use crate::shared::{SHARED, STATUS};

#[embassy_executor::task]
pub async fn encoder_sense_task() {
    info!("Encoder sense task started");

    let mut ticker = ticker_for(TaskId::EncoderSense);
    let mut ticks: u32 = 0;

    loop {
        ticker.next().await;

        ticks = ticks.wrapping_add(1);
        if ticks % ENCODER_SENSE_REPORT_EVERY == 0 {
            trace!(
                "Encoder sense: motor={} dropped_lines={}",
                SHARED.motor(),
                STATUS.dropped()
            );
        }
    }
}

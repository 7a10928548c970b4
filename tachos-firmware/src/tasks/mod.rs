//! Embassy async tasks
//!
//! One task per control loop. Tasks share state through the statics in
//! `shared` and pace themselves with a `Ticker` at their table period.

pub mod counter;
pub mod encoder_sense;
pub mod ramp;
pub mod safety;
pub mod speed;

pub use counter::counter_task;
pub use encoder_sense::encoder_sense_task;
pub use ramp::ramp_task;
pub use safety::safety_task;
pub use speed::speed_task;

use embassy_time::{Duration, Ticker};
use tachos_core::scheduler::TaskId;

/// Ticker at the task's table period
fn ticker_for(id: TaskId) -> Ticker {
    Ticker::every(Duration::from_millis(id.period_ms() as u64))
}

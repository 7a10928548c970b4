//! Tachos - Motor Speed Controller Firmware
//!
//! Potentiometer-commanded motor speed with a slew-limited ramp, an
//! object counter and a latching emergency stop, for RP2040 boards.
//!
//! Each control loop runs at a fixed priority. The three highest run on
//! interrupt executors so they preempt everything below them; acquisition
//! and diagnostics share the thread-mode executor:
//!
//! | Task          | Period | Executor            |
//! |---------------|--------|---------------------|
//! | safety        | 10 ms  | SWI_IRQ_0 (P1)      |
//! | ramp          | 50 ms  | SWI_IRQ_1 (P2)      |
//! | counter       | 20 ms  | SWI_IRQ_2 (P3)      |
//! | speed         | 50 ms  | thread mode         |
//! | encoder_sense | 5 ms   | thread mode         |

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use tachos_core::config::{BoardPins, ControllerConfig, PinConfig};
use tachos_core::scheduler::TASKS;
use tachos_hal_rp2040::{reserve_board_pins, PotInput};

use crate::shared::{DefmtWriter, SHARED, STATUS};

mod shared;
mod tasks;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

/// Controller tuning, checked at boot
const CONFIG: ControllerConfig = ControllerConfig::REFERENCE;

/// Board wiring; the `PIN_n` peripherals taken in `main` must match
const PINS: BoardPins = BoardPins::REFERENCE;

static EXECUTOR_SAFETY: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_RAMP: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_COUNTER: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_SAFETY.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_RAMP.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_2() {
    EXECUTOR_COUNTER.on_interrupt()
}

fn pull(pin: &PinConfig) -> Pull {
    if pin.pull_up {
        Pull::Up
    } else {
        Pull::None
    }
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("Tachos firmware starting...");

    let config = match CONFIG.validate() {
        Ok(()) => CONFIG,
        Err(e) => {
            error!("Invalid controller config: {}, using reference", e);
            ControllerConfig::REFERENCE
        }
    };

    let pot_channel = match reserve_board_pins(&PINS) {
        Ok((pins, channel)) => {
            debug!("{} GPIO pins reserved", pins.allocated_count());
            channel
        }
        Err(e) => defmt::panic!("Invalid pin map: {}", e),
    };

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let emergency = Input::new(p.PIN_15, pull(&PINS.emergency));
    let counting = Input::new(p.PIN_14, pull(&PINS.counting));

    let adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let channel = Channel::new_pin(p.PIN_26, pull(&PINS.potentiometer));
    let pot = PotInput::new(adc, channel);
    info!("Potentiometer on {}", pot_channel);

    if PINS.emergency.is_asserted(emergency.is_high()) {
        warn!("Emergency button held at boot; release it to arm the latch");
    }

    // Without a sink the controller still runs, only status lines are lost
    if let Err(e) = STATUS.install(DefmtWriter) {
        error!("Status sink unavailable: {}", e);
    }

    for spec in TASKS.iter() {
        debug!(
            "Task {}: period={}ms priority={}",
            spec.name, spec.period_ms, spec.priority
        );
    }
    debug!("Initial state: {}", SHARED.snapshot());

    interrupt::SWI_IRQ_0.set_priority(Priority::P1);
    let spawner = EXECUTOR_SAFETY.start(interrupt::SWI_IRQ_0);
    spawner
        .spawn(tasks::safety_task(emergency, config.debounce_samples))
        .unwrap();

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_RAMP.start(interrupt::SWI_IRQ_1);
    spawner.spawn(tasks::ramp_task(config.ramp_step)).unwrap();

    interrupt::SWI_IRQ_2.set_priority(Priority::P3);
    let spawner = EXECUTOR_COUNTER.start(interrupt::SWI_IRQ_2);
    spawner
        .spawn(tasks::counter_task(counting, config.debounce_samples))
        .unwrap();

    info!("All tasks spawned");

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(tasks::speed_task(pot, config)).unwrap();
        spawner.spawn(tasks::encoder_sense_task()).unwrap();
    })
}

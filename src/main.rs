//! Reads a rotary encoder through a GPIO edge interrupt and prints its position over UART.
//!
//! NOTE: the logic is inverted since the encoder lines are pulled up.
//! The encoder board has hardware debouncing, nothing is filtered here.
#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_futures::yield_now;
use embassy_rp::{
    gpio::{Input, Level as PinLevel, Output, Pull},
    interrupt,
    interrupt::{InterruptExt, Priority},
    uart::{self, UartTx},
};
use rotary_encoder_logic::{EncoderState, Level, Reporter};
use {defmt_rtt as _, panic_probe as _};

/// Serial baud rate, 8-N-1.
const BAUD_RATE: u32 = 9600;

static ENCODER: EncoderState = EncoderState::new();

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

/// Runs above the reporting loop and preempts it on every edge of signal A.
#[embassy_executor::task]
async fn edge_handler(mut pin_a: Input<'static>, mut pin_b: Input<'static>) {
    loop {
        pin_a.wait_for_falling_edge().await;
        let Ok(secondary) = Level::sample(&mut pin_b);
        let direction = ENCODER.on_falling_edge(secondary);
        trace!("edge {}", direction);
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // Power the encoder's pull-up resistors from GPIO.
    let _enc_pwr = Output::new(p.PIN_5, PinLevel::High);
    let _enc_gnd = Output::new(p.PIN_6, PinLevel::Low);
    // No pull-up resistor is soldered for the shaft button.
    let _enc_btn = Input::new(p.PIN_4, Pull::Up);
    // A and B use the pull-ups on the encoder module.
    let pin_a = Input::new(p.PIN_2, Pull::None);
    let pin_b = Input::new(p.PIN_3, Pull::None);

    let mut config = uart::Config::default();
    config.baudrate = BAUD_RATE;
    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, config);

    info!(
        "encoder A=GPIO2 B=GPIO3 BTN=GPIO4, reporting on UART0 at {} baud",
        BAUD_RATE
    );

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    unwrap!(spawner.spawn(edge_handler(pin_a, pin_b)));

    let mut reporter = Reporter::new(tx);
    loop {
        if let Some(position) = reporter.poll(&ENCODER) {
            debug!("position {}", position);
        }
        yield_now().await;
    }
}

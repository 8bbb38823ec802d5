//! segtherm - Button-triggered thermometer firmware
//!
//! Reads a DHT11 when the button is pressed and shows the temperature and
//! humidity on a multiplexed 4-digit 7-segment display for about eight
//! seconds. Pin assignment and timing come from `thermometer.toml`.

#![no_std]
#![no_main]

use defmt::*;
use defmt::panic;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Delay, Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use segtherm_core::{Cycle, Thermometer};
use segtherm_drivers::display::SevenSegment;
use segtherm_drivers::sensor::Dht11;
use segtherm_hal_rp2040::gpio::GpioLine;
use segtherm_hal_rp2040::pins::PinBank;
use segtherm_hal_rp2040::Level;

use crate::channels::READ_REQUEST;
use crate::config::CONFIG;

mod channels;
mod config;
mod tasks;

/// Idle polls between heartbeat trace lines
const HEARTBEAT_POLLS: u32 = 1000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("segtherm firmware starting...");

    let config = CONFIG;
    if let Err(e) = config.validate() {
        panic!("Invalid configuration: {}", e);
    }

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let mut bank = PinBank::new(p);

    let pins = &config.pins;
    info!(
        "Pins: sensor=GPIO{}, button=GPIO{}, digits={}, segments={}",
        pins.sensor, pins.button, pins.digits, pins.segments
    );

    let sensor_pin = unwrap!(bank.take(pins.sensor));
    let button_pin = unwrap!(bank.take(pins.button));
    let select_pins = unwrap!(bank.take_many(&pins.digits));
    let segment_pins = unwrap!(bank.take_many(&pins.segments));

    // Digits deselected (high), segments dark (low)
    let selects = select_pins.map(|pin| GpioLine::output(pin, Level::High));
    let segments = segment_pins.map(|pin| GpioLine::output(pin, Level::Low));
    let display = SevenSegment::new(selects, segments, Delay);

    let sensor = Dht11::new(GpioLine::open_bus(sensor_pin), Delay, config.sensor);

    let button = Input::new(button_pin, Pull::Down);
    spawner.spawn(tasks::button_task(button)).unwrap();

    let mut thermometer = Thermometer::new(sensor, display, &config);
    let idle = Duration::from_millis(u64::from(config.input.idle_poll_ms));
    let mut idle_polls: u32 = 0;

    info!(
        "Ready: press the button to read ({} ms on screen, unit {})",
        config.display.total_ms(),
        config.unit
    );

    loop {
        let now_us = Instant::now().as_micros();

        match thermometer.service(&READ_REQUEST, now_us) {
            Cycle::Idle => {
                idle_polls = idle_polls.wrapping_add(1);
                if idle_polls % HEARTBEAT_POLLS == 0 {
                    trace!("Idle, {} polls", idle_polls);
                }
            }
            Cycle::Debounced => {
                debug!("Press ignored: within {} us of the last read", config.input.debounce_us);
                // No sleep after a rejected press
                continue;
            }
            Cycle::Displayed(decoded) => {
                if decoded.corrections.any() {
                    debug!("Single-byte fallback applied: {}", decoded.corrections);
                }
                info!("{}", Display2Format(&decoded.reading.status()));
            }
            Cycle::NoData(e) => {
                warn!("Bad data: {}", e);
            }
        }

        Timer::after(idle).await;
    }
}

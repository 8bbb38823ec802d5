//! Button task
//!
//! Waits for rising edges on the button pin and raises the read request.
//! It never touches the sensor or display.

use defmt::*;
use embassy_rp::gpio::Input;
use segtherm_drivers::input::ButtonWatcher;

use crate::channels::READ_REQUEST;

#[embassy_executor::task]
pub async fn button_task(pin: Input<'static>) {
    info!("Button task started");

    let mut watcher = ButtonWatcher::new(pin);
    loop {
        match watcher.next_press(&READ_REQUEST).await {
            Ok(()) => trace!("Button press #{}", watcher.presses()),
            Err(never) => match never {},
        }
    }
}

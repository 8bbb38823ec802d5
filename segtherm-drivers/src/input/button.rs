//! Button edge watcher
//!
//! Waits for the rising edge of an active-high button and raises the shared
//! [`ReadRequest`]. The watcher does nothing else, so it can never block or
//! race the main loop; debouncing happens when the main loop consumes the
//! request.

use embedded_hal_async::digital::Wait;
use segtherm_core::input::ReadRequest;

/// Wait for one rising edge, then raise `request`
pub async fn wait_for_press<P: Wait>(pin: &mut P, request: &ReadRequest) -> Result<(), P::Error> {
    pin.wait_for_rising_edge().await?;
    request.request();
    Ok(())
}

/// Owns the button pin and forwards every press
pub struct ButtonWatcher<P> {
    pin: P,
    presses: u32,
}

impl<P: Wait> ButtonWatcher<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, presses: 0 }
    }

    /// Edges seen so far
    pub fn presses(&self) -> u32 {
        self.presses
    }

    /// Forward a single press
    pub async fn next_press(&mut self, request: &ReadRequest) -> Result<(), P::Error> {
        wait_for_press(&mut self.pin, request).await?;
        self.presses = self.presses.wrapping_add(1);
        Ok(())
    }

    /// Forward presses until the pin reports an error
    pub async fn run(&mut self, request: &ReadRequest) -> P::Error {
        loop {
            if let Err(e) = self.next_press(request).await {
                return e;
            }
        }
    }
}

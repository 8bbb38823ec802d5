//! Read-request debouncing
//!
//! A request is accepted only when more than the debounce interval has
//! passed since the last accepted read. Rejected requests do not move the
//! window.

use super::machine::{Event, State};
use super::request::ReadRequest;
use crate::config::InputTiming;

/// Button bookkeeping owned by the main loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState {
    /// Time of the last accepted read (µs since boot); `None` before the first
    pub last_accepted_us: Option<u64>,
    /// Input state machine
    pub state: State,
}

/// Outcome of polling the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trigger {
    /// No request pending
    Idle,
    /// Request discarded, too soon after the last read
    Rejected,
    /// Request accepted; run a read now
    Accepted,
}

/// Turns raw read requests into debounced read triggers
#[derive(Debug, Clone)]
pub struct InputController {
    debounce_us: u64,
    button: ButtonState,
}

impl InputController {
    pub const fn new(debounce_us: u64) -> Self {
        Self {
            debounce_us,
            button: ButtonState {
                last_accepted_us: None,
                state: State::Idle,
            },
        }
    }

    pub const fn from_timing(timing: &InputTiming) -> Self {
        Self::new(timing.debounce_us)
    }

    pub fn button(&self) -> &ButtonState {
        &self.button
    }

    /// Whether `now_us` falls inside the window after the last accepted read
    ///
    /// The window is inclusive: a request exactly `debounce_us` after the
    /// last read is still rejected.
    pub fn in_window(&self, now_us: u64) -> bool {
        self.button
            .last_accepted_us
            .is_some_and(|last| now_us <= last.saturating_add(self.debounce_us))
    }

    /// Consume any pending request and decide whether to read
    pub fn poll(&mut self, request: &ReadRequest, now_us: u64) -> Trigger {
        if request.take() {
            self.apply(Event::RisingEdge);
        }

        if !self.button.state.is_pending() {
            return Trigger::Idle;
        }

        if self.in_window(now_us) {
            self.apply(Event::Rejected);
            Trigger::Rejected
        } else {
            self.button.last_accepted_us = Some(now_us);
            self.apply(Event::Accepted);
            Trigger::Accepted
        }
    }

    fn apply(&mut self, event: Event) {
        self.button.state = self.button.state.transition(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE_US: u64 = 2_000_000;

    fn press(controller: &mut InputController, request: &ReadRequest, now_us: u64) -> Trigger {
        request.request();
        controller.poll(request, now_us)
    }

    #[test]
    fn test_idle_without_request() {
        let request = ReadRequest::new();
        let mut controller = InputController::new(DEBOUNCE_US);
        assert_eq!(controller.poll(&request, 0), Trigger::Idle);
        assert_eq!(controller.poll(&request, 5_000_000), Trigger::Idle);
        assert_eq!(controller.button().last_accepted_us, None);
    }

    #[test]
    fn test_first_press_at_boot_accepted() {
        let request = ReadRequest::new();
        let mut controller = InputController::new(DEBOUNCE_US);
        assert_eq!(press(&mut controller, &request, 0), Trigger::Accepted);
        assert_eq!(controller.button().last_accepted_us, Some(0));
        assert_eq!(controller.button().state, State::Idle);
    }

    #[test]
    fn test_debounce_window() {
        let request = ReadRequest::new();
        let mut controller = InputController::new(DEBOUNCE_US);

        assert_eq!(press(&mut controller, &request, 0), Trigger::Accepted);
        assert_eq!(press(&mut controller, &request, 1_000_000), Trigger::Rejected);
        // Boundary is still inside the window
        assert_eq!(press(&mut controller, &request, 2_000_000), Trigger::Rejected);
        assert_eq!(press(&mut controller, &request, 2_000_001), Trigger::Accepted);
        assert_eq!(controller.button().last_accepted_us, Some(2_000_001));
    }

    #[test]
    fn test_rejection_keeps_timestamp() {
        let request = ReadRequest::new();
        let mut controller = InputController::new(DEBOUNCE_US);

        press(&mut controller, &request, 10_000_000);
        assert_eq!(press(&mut controller, &request, 11_900_000), Trigger::Rejected);
        assert_eq!(controller.button().last_accepted_us, Some(10_000_000));
        assert_eq!(press(&mut controller, &request, 12_000_001), Trigger::Accepted);
    }

    #[test]
    fn test_request_cleared_on_rejection() {
        let request = ReadRequest::new();
        let mut controller = InputController::new(DEBOUNCE_US);

        press(&mut controller, &request, 0);
        press(&mut controller, &request, 1);
        assert!(!request.is_pending());
        // A stale request must not fire once the window has passed
        assert_eq!(controller.poll(&request, 3_000_000), Trigger::Idle);
    }

    #[test]
    fn test_from_timing() {
        let controller = InputController::from_timing(&InputTiming::DEFAULT);
        assert!(!controller.in_window(0));
    }
}

//! Input state machine
//!
//! Two states: waiting for a press, or holding a press the main loop has not
//! yet handled.

/// Input states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No read requested
    #[default]
    Idle,
    /// A press was seen and awaits the main loop
    ReadPending,
}

/// Events that drive the input state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Rising edge on the button line
    RisingEdge,
    /// Main loop accepted the request and will read
    Accepted,
    /// Main loop discarded the request (too soon after the last read)
    Rejected,
}

impl State {
    pub fn is_pending(&self) -> bool {
        matches!(self, State::ReadPending)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Idle, RisingEdge) => ReadPending,
            // Further edges while pending collapse into the one request
            (ReadPending, RisingEdge) => ReadPending,
            (ReadPending, Accepted | Rejected) => Idle,

            // Main loop decisions without a pending request are ignored
            (Idle, Accepted | Rejected) => Idle,
        }
    }
}

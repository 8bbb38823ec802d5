//! State shared between the button task and the main loop

use segtherm_core::input::ReadRequest;

/// Raised on every button press, consumed by the main loop
pub static READ_REQUEST: ReadRequest = ReadRequest::new();

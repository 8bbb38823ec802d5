//! Button input handling
//!
//! The button edge only raises a [`ReadRequest`]. The main loop polls the
//! request through an [`InputController`], which applies the minimum spacing
//! between accepted reads and reports whether a read should run.

pub mod debounce;
pub mod machine;
pub mod request;

pub use debounce::{ButtonState, InputController, Trigger};
pub use machine::{Event, State};
pub use request::ReadRequest;

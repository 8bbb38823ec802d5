//! Button input

pub mod button;

pub use button::{wait_for_press, ButtonWatcher};

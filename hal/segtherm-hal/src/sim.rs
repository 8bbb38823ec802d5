//! Simulated lines for host-side testing
//!
//! A [`SimLine`] replays a scripted sequence of levels against a shared
//! [`SimClock`]. The script starts playing the moment the line is switched
//! to [`Direction::Input`], which is exactly when a single-wire sensor takes
//! over the bus. [`SimDelay`] advances the same clock, so busy-wait loops
//! built on `DelayNs` observe the script deterministically.

use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::gpio::{DigitalLine, Direction, Level};

/// Maximum scripted segments per line
pub const MAX_SEGMENTS: usize = 128;

/// Maximum recorded line events; later events are dropped
pub const MAX_EVENTS: usize = 64;

/// Monotonic simulated time in nanoseconds
#[derive(Debug, Default)]
pub struct SimClock {
    now_ns: Cell<u64>,
}

impl SimClock {
    /// Create a clock at t = 0
    pub const fn new() -> Self {
        Self {
            now_ns: Cell::new(0),
        }
    }

    /// Current time in nanoseconds
    pub fn now_ns(&self) -> u64 {
        self.now_ns.get()
    }

    /// Current time in microseconds
    pub fn now_us(&self) -> u64 {
        self.now_ns.get() / 1_000
    }

    /// Move time forward
    pub fn advance_ns(&self, ns: u64) {
        self.now_ns.set(self.now_ns.get().saturating_add(ns));
    }
}

/// Delay that advances a [`SimClock`] instead of sleeping
#[derive(Debug, Clone, Copy)]
pub struct SimDelay<'a> {
    clock: &'a SimClock,
}

impl<'a> SimDelay<'a> {
    /// Create a delay bound to `clock`
    pub fn new(clock: &'a SimClock) -> Self {
        Self { clock }
    }
}

impl DelayNs for SimDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance_ns(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.advance_ns(us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance_ns(ms as u64 * 1_000_000);
    }
}

/// Something that happened to a simulated line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Direction changed at the given time (ns)
    Direction(u64, Direction),
    /// Output level written at the given time (ns)
    Level(u64, Level),
}

/// Scripted digital line
pub struct SimLine<'a> {
    clock: &'a SimClock,
    direction: Direction,
    driven: Level,
    /// Level read once the script is exhausted (pull-up/pull-down)
    idle: Level,
    /// (level, duration in ns)
    script: Vec<(Level, u64), MAX_SEGMENTS>,
    /// Time the line was last released to input
    released_at_ns: u64,
    events: Vec<LineEvent, MAX_EVENTS>,
    writes: u32,
}

impl<'a> SimLine<'a> {
    /// Create an input line that idles high (pulled up)
    pub fn new(clock: &'a SimClock) -> Self {
        Self {
            clock,
            direction: Direction::Input,
            driven: Level::Low,
            idle: Level::High,
            script: Vec::new(),
            released_at_ns: clock.now_ns(),
            events: Vec::new(),
            writes: 0,
        }
    }

    /// Set the level read when the script is exhausted
    pub fn with_idle(mut self, idle: Level) -> Self {
        self.idle = idle;
        self
    }

    /// Append a scripted segment
    ///
    /// # Panics
    /// If more than [`MAX_SEGMENTS`] segments are scripted.
    pub fn push(&mut self, level: Level, duration_us: u32) -> &mut Self {
        if self.script.push((level, duration_us as u64 * 1_000)).is_err() {
            panic!("SimLine script exceeds {} segments", MAX_SEGMENTS);
        }
        self
    }

    /// Drop the script; the line reads its idle level from now on
    pub fn clear_script(&mut self) {
        self.script.clear();
    }

    /// Current direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Last level written
    pub fn driven_level(&self) -> Level {
        self.driven
    }

    /// Number of `write_level` calls so far
    pub fn write_count(&self) -> u32 {
        self.writes
    }

    /// Recorded direction/level events, oldest first
    pub fn events(&self) -> &[LineEvent] {
        &self.events
    }

    fn record(&mut self, event: LineEvent) {
        // A full log is fine; tests only inspect the first few events
        let _ = self.events.push(event);
    }

    fn scripted_level(&self) -> Level {
        let mut elapsed = self.clock.now_ns().saturating_sub(self.released_at_ns);
        for &(level, duration) in self.script.iter() {
            if elapsed < duration {
                return level;
            }
            elapsed -= duration;
        }
        self.idle
    }
}

impl DigitalLine for SimLine<'_> {
    fn set_direction(&mut self, direction: Direction) {
        if direction == Direction::Input {
            self.released_at_ns = self.clock.now_ns();
        }
        self.direction = direction;
        self.record(LineEvent::Direction(self.clock.now_ns(), direction));
    }

    fn write_level(&mut self, level: Level) {
        self.driven = level;
        self.writes += 1;
        self.record(LineEvent::Level(self.clock.now_ns(), level));
    }

    fn read_level(&self) -> Level {
        match self.direction {
            Direction::Output => self.driven,
            Direction::Input => self.scripted_level(),
        }
    }
}

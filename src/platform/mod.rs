//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Discrete input events and the held-key snapshot
//! - Frame pacing
//! - The terminal host (crossterm)

pub mod terminal;

use std::time::{Duration, Instant};

use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Enter,
    KeypadEnter,
    Backspace,
    Other,
}

/// Discrete input, materialised once per loop iteration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close / quit request
    Quit,
    /// Pointer pressed at a playfield position
    PointerDown(Vec2),
    /// Pointer released at a playfield position
    PointerUp(Vec2),
    KeyDown(Key),
    /// A printable character was typed
    TextInput(char),
}

/// Direction keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

/// Source of input for the game loop
pub trait InputSource {
    /// Drain every event that arrived since the last call
    fn poll_events(&mut self) -> std::io::Result<Vec<InputEvent>>;

    /// Snapshot of the held direction keys
    fn held_keys(&self) -> HeldKeys;
}

/// Scripted input: one batch of events per poll, for tests and demos
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: std::collections::VecDeque<(Vec<InputEvent>, HeldKeys)>,
    held: HeldKeys,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one loop iteration worth of input
    pub fn push_frame(&mut self, events: Vec<InputEvent>, held: HeldKeys) {
        self.frames.push_back((events, held));
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> std::io::Result<Vec<InputEvent>> {
        match self.frames.pop_front() {
            Some((events, held)) => {
                self.held = held;
                Ok(events)
            }
            // Script exhausted: ask the game to stop
            None => Ok(vec![InputEvent::Quit]),
        }
    }

    fn held_keys(&self) -> HeldKeys {
        self.held
    }
}

/// Sleeps out the rest of each frame, like a fixed-rate clock
#[derive(Debug)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / tick_rate.max(1),
            last: Instant::now(),
        }
    }

    /// Block until one frame has passed since the previous call
    pub fn tick(&mut self) {
        let elapsed = self.last.elapsed();
        if elapsed < self.frame {
            std::thread::sleep(self.frame - elapsed);
        }
        self.last = Instant::now();
    }

    /// Forget the time spent outside paced screens
    pub fn restart(&mut self) {
        self.last = Instant::now();
    }
}

//! Keyboard state: held movement keys plus queued one-shot presses.
//!
//! - **Held:** left/right/jump are level-triggered and sampled once per frame
//!   as a [`TickInput`].
//! - **Pressed:** pause and confirm are edge-triggered. A key-down while the
//!   key is already held (auto-repeat) does not queue a second press. Presses
//!   stay queued until the driver drains them.

use std::collections::{HashSet, VecDeque};

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Space,
    Enter,
    P,
    W,
    A,
    D,
}

/// A one-shot press the flow machine cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Press {
    /// Enter: start / advance / restart depending on the phase
    Confirm,
    PauseToggle,
}

#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
    presses: VecDeque<Press>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        if !self.held.insert(key) {
            return;
        }
        match key {
            Key::Enter => self.presses.push_back(Press::Confirm),
            Key::P => self.presses.push_back(Press::PauseToggle),
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Sample the movement keys for one simulation step
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.is_held(Key::Left) || self.is_held(Key::A),
            right: self.is_held(Key::Right) || self.is_held(Key::D),
            jump: self.is_held(Key::Up) || self.is_held(Key::W) || self.is_held(Key::Space),
        }
    }

    /// Take every queued press, oldest first
    pub fn drain_presses(&mut self) -> impl Iterator<Item = Press> + '_ {
        self.presses.drain(..)
    }
}

//! Platform abstraction layer
//!
//! Handles the host-side concerns the simulation must not touch:
//! - Time/ticks (`clock`)
//! - Input events (`input`)

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{InputState, Key};

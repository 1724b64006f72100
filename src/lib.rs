//! JumpMan - A single-screen retro platform jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game flow)
//! - `game`: Frame driver that owns the world and feeds the simulation
//! - `platform`: Frame clock and keyboard input state
//! - `render`: Renderer seam plus HUD/overlay text
//! - `tuning`: Data-driven physics and scoring constants
//! - `settings`: Driver preferences
//! - `autopilot`: Demo-mode bot

pub mod autopilot;
pub mod game;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal tick rate of the frame driver
    pub const TICK_RATE_HZ: f32 = 60.0;
    /// Upper bound on a single simulation step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.05;

    /// Screen / world dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 480.0;

    /// Physics (pixels, seconds)
    pub const GRAVITY: f32 = 1600.0;
    pub const MOVE_SPEED: f32 = 260.0;
    pub const JUMP_POWER: f32 = 600.0;
    /// Gap left between the player and a platform after resolution
    pub const CONTACT_EPSILON: f32 = 0.01;
    /// How far below the screen the player may fall before dying
    pub const FALL_MARGIN: f32 = 200.0;

    /// Player box
    pub const PLAYER_WIDTH: f32 = 26.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;

    /// Coins are fixed-size squares
    pub const COIN_SIZE: f32 = 14.0;

    /// Enemy box and patrol speed
    pub const ENEMY_WIDTH: f32 = 26.0;
    pub const ENEMY_HEIGHT: f32 = 20.0;
    pub const ENEMY_SPEED: f32 = 80.0;
    /// Max depth of the player's feet below an enemy's top that still counts as a stomp
    pub const STOMP_TOLERANCE: f32 = 12.0;
    /// Bounce after a stomp, as a fraction of jump power
    pub const STOMP_BOUNCE: f32 = 0.7;

    /// Scoring
    pub const COIN_SCORE: u32 = 100;
    pub const STOMP_SCORE: u32 = 200;
    pub const STARTING_LIVES: i32 = 3;
}

/// Clamp a measured frame delta into the range the simulation accepts.
///
/// Never panics: a NaN `dt` becomes 0, and a `max_dt` that is not a positive
/// finite number caps the step at 0.
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_nan() || max_dt.is_nan() || max_dt <= 0.0 {
        return 0.0;
    }
    dt.max(0.0).min(max_dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_dt_range() {
        assert_eq!(clamp_dt(0.3, 0.05), 0.05);
        assert_eq!(clamp_dt(-1.0, 0.05), 0.0);
        assert_eq!(clamp_dt(f32::NAN, 0.05), 0.0);
        assert_eq!(clamp_dt(0.01, f32::INFINITY), 0.01);
    }

    #[test]
    fn test_clamp_dt_bad_limit_does_not_panic() {
        assert_eq!(clamp_dt(0.016, -0.05), 0.0);
        assert_eq!(clamp_dt(0.016, f32::NAN), 0.0);
        assert_eq!(clamp_dt(0.016, 0.0), 0.0);
    }
}

//! Data-driven game balance
//!
//! Physics and scoring numbers the simulation reads every step. Defaults
//! match `crate::consts`; a JSON file may override any subset of them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Screen size the player is confined to
    pub world_width: f32,
    pub world_height: f32,

    // === Physics ===
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Horizontal run speed (px/s)
    pub move_speed: f32,
    /// Initial upward speed of a jump (px/s)
    pub jump_power: f32,
    /// Gap left between the player and a platform after collision resolution
    pub contact_epsilon: f32,
    /// Distance below the screen at which a fall kills
    pub fall_margin: f32,

    // === Enemies ===
    /// Patrol speed (px/s) given to every enemy when a level loads
    pub enemy_speed: f32,
    pub stomp_tolerance: f32,
    /// Fraction of `jump_power` the player bounces with after a stomp
    pub stomp_bounce: f32,

    // === Scoring ===
    pub coin_score: u32,
    pub stomp_score: u32,
    pub starting_lives: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,

            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_power: JUMP_POWER,
            contact_epsilon: CONTACT_EPSILON,
            fall_margin: FALL_MARGIN,

            enemy_speed: ENEMY_SPEED,
            stomp_tolerance: STOMP_TOLERANCE,
            stomp_bounce: STOMP_BOUNCE,

            coin_score: COIN_SCORE,
            stomp_score: STOMP_SCORE,
            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read tuning: {e}"))?;
        serde_json::from_str(&data).map_err(|e| format!("parse tuning JSON: {e}"))
    }

    /// Load a tuning file, falling back to defaults and returning the error
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(tuning) => (tuning, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Suspicious values as human-readable warnings (not hard errors)
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.world_width <= 0.0 || self.world_height <= 0.0 {
            w.push("world dimensions must be > 0".into());
        }
        if self.gravity <= 0.0 {
            w.push(format!(
                "gravity {} is not downward; the player will float",
                self.gravity
            ));
        }
        if self.move_speed < 0.0 {
            w.push(format!(
                "move_speed {} negative; controls are inverted",
                self.move_speed
            ));
        }
        if self.jump_power <= 0.0 {
            w.push(format!(
                "jump_power {} must be > 0 to leave the ground",
                self.jump_power
            ));
        }
        if self.contact_epsilon <= 0.0 {
            w.push("contact_epsilon must be > 0 or resting contacts re-trigger".into());
        } else if self.contact_epsilon > 1.0 {
            w.push(format!(
                "contact_epsilon {} large; visible gaps at contacts",
                self.contact_epsilon
            ));
        }
        if !self.enemy_speed.is_finite() || self.enemy_speed < 0.0 {
            w.push(format!(
                "enemy_speed {} must be a finite value >= 0",
                self.enemy_speed
            ));
        } else if self.enemy_speed == 0.0 {
            w.push("enemy_speed 0; enemies stand still".into());
        }
        if self.stomp_tolerance <= 0.0 {
            w.push("stomp_tolerance <= 0; enemies can never be stomped".into());
        }
        if !(0.0..=1.5).contains(&self.stomp_bounce) {
            w.push(format!("stomp_bounce {} outside recommended 0..1.5", self.stomp_bounce));
        }
        if self.starting_lives <= 0 {
            w.push(format!(
                "starting_lives {} ends the game on the first death",
                self.starting_lives
            ));
        }
        w
    }
}

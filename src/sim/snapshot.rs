//! Read-only view of the world for the renderer

use super::rect::Rect;
use super::state::{Coin, Enemy, GamePhase, Goal, Platform, World};

/// Everything a renderer may look at, borrowed from the world
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub phase: GamePhase,
    pub level_index: usize,
    pub level_count: usize,
    pub level_name: &'a str,
    pub platforms: &'a [Platform],
    pub coins: &'a [Coin],
    pub enemies: &'a [Enemy],
    pub goal: &'a Goal,
    /// All coins of the level collected
    pub goal_open: bool,
    pub player: &'a Rect,
    pub score: u32,
    pub lives: i32,
    pub level_time: f32,
}

impl<'a> Snapshot<'a> {
    pub fn capture(world: &'a World, level_count: usize) -> Self {
        Self {
            phase: world.phase,
            level_index: world.level_index,
            level_count,
            level_name: &world.level_name,
            platforms: &world.platforms,
            coins: &world.coins,
            enemies: &world.enemies,
            goal: &world.goal,
            goal_open: world.goal_open(),
            player: &world.player.rect,
            score: world.session.score,
            lives: world.session.lives,
            level_time: world.session.level_time,
        }
    }
}

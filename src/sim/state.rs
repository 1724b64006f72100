//! Game state and core simulation types
//!
//! Everything the simulation step mutates lives in [`World`]. Level templates
//! are never aliased: loading a level clones their entities into the world.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Current phase of the game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Level title card, waiting for start
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Goal reached, waiting for advance
    LevelComplete,
    /// Out of lives or finished the last level
    GameOver,
}

/// Something that happened during a simulation step or flow transition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { score: u32 },
    EnemyStomped { score: u32 },
    Jumped,
    /// Player lost a life (`lives_left` may be 0)
    PlayerDied { lives_left: i32 },
    Respawned,
    LevelComplete { level_index: usize, time: f32 },
    LevelLoaded { level_index: usize },
    GameOver { score: u32 },
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    pub on_ground: bool,
    /// Where the player reappears after losing a life
    pub spawn: Vec2,
    /// Jump latch: set while the jump key is up, cleared when a jump fires
    pub jump_armed: bool,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            rect: Rect::new(spawn.x, spawn.y, PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            on_ground: false,
            spawn,
            jump_armed: true,
        }
    }

    /// Put the player back at the spawn point, motionless and airborne
    pub fn respawn(&mut self) {
        self.rect.set_position(self.spawn);
        self.vel = Vec2::ZERO;
        self.on_ground = false;
    }
}

/// Static level geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
        }
    }
}

/// A patrolling enemy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// Left patrol bound (enemy's left edge never goes below this)
    pub min_x: f32,
    /// Right patrol bound (enemy's right edge never goes past this)
    pub max_x: f32,
    /// Signed horizontal speed in px/s
    #[serde(default = "default_enemy_speed")]
    pub speed: f32,
    #[serde(default = "default_alive")]
    pub alive: bool,
}

fn default_enemy_speed() -> f32 {
    ENEMY_SPEED
}

fn default_alive() -> bool {
    true
}

impl Enemy {
    /// Create an enemy standing with its feet at `floor_y`
    pub fn new(x: f32, floor_y: f32, min_x: f32, max_x: f32) -> Self {
        Self {
            rect: Rect::new(x, floor_y - ENEMY_HEIGHT, ENEMY_WIDTH, ENEMY_HEIGHT),
            min_x,
            max_x,
            speed: ENEMY_SPEED,
            alive: true,
        }
    }

    /// Walk back and forth between the patrol bounds
    pub fn patrol(&mut self, dt: f32) {
        self.rect.x += self.speed * dt;
        if self.rect.x < self.min_x {
            self.rect.x = self.min_x;
            self.speed = self.speed.abs();
        }
        if self.rect.right() > self.max_x {
            self.rect.x = self.max_x - self.rect.w;
            self.speed = -self.speed.abs();
        }
    }
}

/// The level exit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub rect: Rect,
}

impl Goal {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
        }
    }
}

/// Score, lives and the per-level timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub score: u32,
    pub lives: i32,
    pub level_time: f32,
    pub timer_running: bool,
}

impl Session {
    pub fn new(lives: i32) -> Self {
        Self {
            score: 0,
            lives,
            level_time: 0.0,
            timer_running: false,
        }
    }

    pub fn tick_timer(&mut self, dt: f32) {
        if self.timer_running {
            self.level_time += dt;
        }
    }

    /// Zero and stop the level timer
    pub fn reset_timer(&mut self) {
        self.level_time = 0.0;
        self.timer_running = false;
    }

    /// Fresh counters for a brand-new game
    pub fn reset(&mut self, lives: i32) {
        self.score = 0;
        self.lives = lives;
        self.reset_timer();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(STARTING_LIVES)
    }
}

/// Complete mutable game state, owned by the frame driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub phase: GamePhase,
    /// Index of the active level in the catalog
    pub level_index: usize,
    pub level_name: String,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    pub goal: Goal,
    pub session: Session,
    /// Screen bounds the player is clamped to
    pub width: f32,
    pub height: f32,
}

impl World {
    /// True once every coin of the level has been picked up
    pub fn goal_open(&self) -> bool {
        self.coins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enemy_patrol_turns_at_bounds() {
        let mut enemy = Enemy::new(300.0, 440.0, 300.0, 400.0);
        assert_eq!(enemy.rect.y, 420.0);

        // Walk right until the right edge hits max_x
        for _ in 0..200 {
            enemy.patrol(1.0 / 60.0);
            assert!(enemy.rect.x >= enemy.min_x);
            assert!(enemy.rect.right() <= enemy.max_x);
        }

        let mut enemy = Enemy::new(370.0, 440.0, 300.0, 400.0);
        enemy.patrol(0.1);
        assert_eq!(enemy.rect.right(), 400.0);
        assert_eq!(enemy.speed, -ENEMY_SPEED);

        let mut enemy = Enemy::new(302.0, 440.0, 300.0, 400.0);
        enemy.speed = -ENEMY_SPEED;
        enemy.patrol(0.1);
        assert_eq!(enemy.rect.x, 300.0);
        assert_eq!(enemy.speed, ENEMY_SPEED);
    }

    #[test]
    fn test_session_reset() {
        let mut session = Session::default();
        session.score = 1200;
        session.lives = 1;
        session.level_time = 42.0;
        session.timer_running = true;

        session.reset(STARTING_LIVES);
        assert_eq!(session.score, 0);
        assert_eq!(session.lives, STARTING_LIVES);
        assert_eq!(session.level_time, 0.0);
        assert!(!session.timer_running);
    }

    #[test]
    fn test_player_respawn() {
        let spawn = Vec2::new(24.0, 380.0);
        let mut player = Player::new(spawn);
        player.rect.x = 500.0;
        player.vel = Vec2::new(10.0, 20.0);
        player.on_ground = true;

        player.respawn();
        assert_eq!(player.rect.position(), spawn);
        assert_eq!(player.vel, Vec2::ZERO);
        assert!(!player.on_ground);
    }
}

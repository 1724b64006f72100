//! Level templates and the ordered level catalog
//!
//! Templates are read-only blueprints. [`Level::instantiate`] deep-copies
//! their entities into a fresh [`World`], so nothing a running level does
//! can leak back into the catalog.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Coin, Enemy, GamePhase, Goal, Platform, Player, Session, World};
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::tuning::Tuning;

/// One stage: its name and the canonical layout of everything in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub spawn: Vec2,
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub coins: Vec<Coin>,
    #[serde(default)]
    pub enemies: Vec<Enemy>,
    pub goal: Goal,
}

impl Level {
    /// Build a world for this level, carrying over the session counters.
    ///
    /// Enemies keep their starting direction but patrol at the tuned speed.
    pub fn instantiate(&self, index: usize, session: Session, tuning: &Tuning) -> World {
        let enemies = self
            .enemies
            .iter()
            .map(|enemy| Enemy {
                speed: tuning.enemy_speed.copysign(enemy.speed),
                ..*enemy
            })
            .collect();
        World {
            phase: GamePhase::Menu,
            level_index: index,
            level_name: self.name.clone(),
            player: Player::new(self.spawn),
            platforms: self.platforms.clone(),
            coins: self.coins.clone(),
            enemies,
            goal: self.goal,
            session,
            width: tuning.world_width,
            height: tuning.world_height,
        }
    }

    /// Layout problems that would break the simulation's invariants
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let name = &self.name;
        for (i, p) in self.platforms.iter().enumerate() {
            if !p.rect.is_valid() {
                errors.push(format!("{name}: platform {i} has non-positive size"));
            }
        }
        for (i, c) in self.coins.iter().enumerate() {
            if !c.rect.is_valid() {
                errors.push(format!("{name}: coin {i} has non-positive size"));
            }
        }
        for (i, e) in self.enemies.iter().enumerate() {
            if !e.rect.is_valid() {
                errors.push(format!("{name}: enemy {i} has non-positive size"));
            }
            if e.max_x - e.min_x < e.rect.w {
                errors.push(format!(
                    "{name}: enemy {i} patrol range {}..{} narrower than its width {}",
                    e.min_x, e.max_x, e.rect.w
                ));
            }
        }
        if !self.goal.rect.is_valid() {
            errors.push(format!("{name}: goal has non-positive size"));
        }
        errors
    }
}

/// Ordered, read-only list of levels (never empty)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelCatalog {
    levels: Vec<Level>,
}

impl LevelCatalog {
    /// Build a catalog, rejecting empty lists and malformed layouts
    pub fn new(levels: Vec<Level>) -> Result<Self, String> {
        if levels.is_empty() {
            return Err("level catalog must contain at least one level".into());
        }
        let errors: Vec<String> = levels.iter().flat_map(Level::validate).collect();
        if !errors.is_empty() {
            return Err(errors.join("; "));
        }
        Ok(Self { levels })
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let levels: Vec<Level> =
            serde_json::from_str(json).map_err(|e| format!("parse levels JSON: {e}"))?;
        Self::new(levels)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read levels: {e}"))?;
        let catalog = Self::from_json_str(&data)?;
        log::info!(
            "Loaded {} levels from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Never true for a catalog built through `new` or `builtin`
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get a level template. Panics when `index` is out of range.
    pub fn level(&self, index: usize) -> &Level {
        assert!(
            index < self.levels.len(),
            "level index {index} out of range (catalog has {})",
            self.levels.len()
        );
        &self.levels[index]
    }

    pub fn has_next(&self, index: usize) -> bool {
        index + 1 < self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }

    /// The three built-in stages, laid out for an 800x480 screen
    pub fn builtin() -> Self {
        let w = WORLD_WIDTH;
        let h = WORLD_HEIGHT;
        let spawn = Vec2::new(24.0, h - 100.0);

        let beginner_bluffs = Level {
            name: "Beginner Bluffs".into(),
            spawn,
            platforms: vec![
                Platform::new(0.0, h - 40.0, w, 40.0),
                Platform::new(60.0, h - 120.0, 120.0, 16.0),
                Platform::new(260.0, h - 180.0, 120.0, 16.0),
                Platform::new(460.0, h - 140.0, 120.0, 16.0),
                Platform::new(650.0, h - 210.0, 120.0, 16.0),
            ],
            coins: vec![
                Coin::new(110.0, h - 160.0),
                Coin::new(310.0, h - 220.0),
                Coin::new(510.0, h - 180.0),
            ],
            enemies: vec![Enemy::new(350.0, h - 40.0, 300.0, 500.0)],
            goal: Goal::new(w - 60.0, h - 250.0, 30.0, 60.0),
        };

        let gaps_and_goons = Level {
            name: "Gaps & Goons".into(),
            spawn,
            platforms: vec![
                Platform::new(0.0, h - 40.0, 230.0, 40.0),
                Platform::new(280.0, h - 40.0, 200.0, 40.0),
                Platform::new(520.0, h - 40.0, 280.0, 40.0),
                Platform::new(120.0, h - 160.0, 120.0, 16.0),
                Platform::new(340.0, h - 220.0, 120.0, 16.0),
                Platform::new(560.0, h - 180.0, 120.0, 16.0),
            ],
            coins: vec![
                Coin::new(170.0, h - 200.0),
                Coin::new(390.0, h - 260.0),
                Coin::new(610.0, h - 220.0),
            ],
            enemies: vec![
                Enemy::new(140.0, h - 40.0, 120.0, 220.0),
                Enemy::new(560.0, h - 40.0, 520.0, 760.0),
            ],
            goal: Goal::new(w - 60.0, h - 230.0, 30.0, 60.0),
        };

        let tower_tangle = Level {
            name: "Tower Tangle".into(),
            spawn,
            platforms: vec![
                Platform::new(0.0, h - 40.0, w, 40.0),
                Platform::new(80.0, h - 120.0, 80.0, 16.0),
                Platform::new(180.0, h - 180.0, 80.0, 16.0),
                Platform::new(280.0, h - 240.0, 80.0, 16.0),
                Platform::new(380.0, h - 300.0, 80.0, 16.0),
                Platform::new(500.0, h - 260.0, 80.0, 16.0),
                Platform::new(620.0, h - 220.0, 80.0, 16.0),
            ],
            coins: vec![
                Coin::new(100.0, h - 160.0),
                Coin::new(300.0, h - 280.0),
                Coin::new(520.0, h - 300.0),
                Coin::new(650.0, h - 260.0),
            ],
            enemies: vec![Enemy::new(420.0, h - 40.0, 380.0, 620.0)],
            goal: Goal::new(w - 70.0, h - 320.0, 30.0, 60.0),
        };

        Self {
            levels: vec![beginner_bluffs, gaps_and_goons, tower_tangle],
        }
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

//! Game-flow state machine
//!
//! Menu → Playing ⇄ Paused, Playing → LevelComplete → (next level | GameOver),
//! Playing → GameOver, GameOver → Menu. Commands that do not match the
//! current phase are ignored.

use serde::{Deserialize, Serialize};

use super::level::LevelCatalog;
use super::state::{GameEvent, GamePhase, Session, World};
use crate::tuning::Tuning;

/// One-shot commands from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowCommand {
    Start,
    PauseToggle,
    Advance,
    Restart,
}

impl FlowCommand {
    /// What the confirm key means in `phase`
    pub fn confirm_for(phase: GamePhase) -> Option<Self> {
        match phase {
            GamePhase::Menu => Some(FlowCommand::Start),
            GamePhase::LevelComplete => Some(FlowCommand::Advance),
            GamePhase::GameOver => Some(FlowCommand::Restart),
            GamePhase::Playing | GamePhase::Paused => None,
        }
    }
}

/// A fresh game: first level, full lives, zero score
pub fn new_world(catalog: &LevelCatalog, tuning: &Tuning) -> World {
    let session = Session::new(tuning.starting_lives);
    let world = catalog.level(0).instantiate(0, session, tuning);
    log::info!("Loaded level 1/{}: {}", catalog.len(), world.level_name);
    world
}

/// Swap the active level for a fresh copy of `catalog[index]`.
///
/// Keeps score and lives, resets the level timer and lands in `Menu`.
/// Panics if `index` is out of range.
pub fn load_level(
    world: &mut World,
    catalog: &LevelCatalog,
    tuning: &Tuning,
    index: usize,
) -> GameEvent {
    let mut session = std::mem::take(&mut world.session);
    session.reset_timer();
    *world = catalog.level(index).instantiate(index, session, tuning);
    log::info!(
        "Loaded level {}/{}: {}",
        index + 1,
        catalog.len(),
        world.level_name
    );
    GameEvent::LevelLoaded { level_index: index }
}

/// Zero the score, refill lives, stop the timer
pub fn reset_session(world: &mut World, tuning: &Tuning) {
    world.session.reset(tuning.starting_lives);
}

/// Apply a flow command, returning any events it caused
pub fn apply_command(
    world: &mut World,
    catalog: &LevelCatalog,
    tuning: &Tuning,
    command: FlowCommand,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let phase = world.phase;

    match (phase, command) {
        (GamePhase::Menu, FlowCommand::Start) => {
            world.phase = GamePhase::Playing;
            world.session.timer_running = true;
        }
        (GamePhase::Playing, FlowCommand::PauseToggle) => {
            world.phase = GamePhase::Paused;
        }
        (GamePhase::Paused, FlowCommand::PauseToggle) => {
            world.phase = GamePhase::Playing;
        }
        (GamePhase::LevelComplete, FlowCommand::Advance) => {
            if catalog.has_next(world.level_index) {
                let next = world.level_index + 1;
                events.push(load_level(world, catalog, tuning, next));
            } else {
                world.phase = GamePhase::GameOver;
                log::info!("All levels cleared with score {}", world.session.score);
                events.push(GameEvent::GameOver {
                    score: world.session.score,
                });
            }
        }
        (GamePhase::GameOver, FlowCommand::Restart) => {
            events.push(load_level(world, catalog, tuning, 0));
            reset_session(world, tuning);
        }
        _ => {
            log::trace!("Ignoring {command:?} in {phase:?}");
            return events;
        }
    }

    log::debug!("{phase:?} --{command:?}--> {:?}", world.phase);
    events
}

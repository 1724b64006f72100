//! Frame driver
//!
//! `Game` is the single owner of the world. Each frame it drains queued
//! presses into flow commands, then steps the simulation if (and only if)
//! the world is `Playing`.

use crate::platform::input::Press;
use crate::platform::{FrameClock, InputState};
use crate::render::Renderer;
use crate::settings::Settings;
use crate::sim::{
    FlowCommand, GameEvent, GamePhase, LevelCatalog, Snapshot, World, advance, apply_command,
    new_world,
};
use crate::tuning::Tuning;

pub struct Game {
    pub catalog: LevelCatalog,
    pub tuning: Tuning,
    pub settings: Settings,
    pub world: World,
    pub input: InputState,
    pub clock: FrameClock,
}

impl Game {
    pub fn new(catalog: LevelCatalog, tuning: Tuning, settings: Settings) -> Self {
        let world = new_world(&catalog, &tuning);
        let clock = FrameClock::new(settings.max_frame_dt);
        Self {
            catalog,
            tuning,
            settings,
            world,
            input: InputState::new(),
            clock,
        }
    }

    /// Run one frame using wall-clock time since the previous frame
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let dt = self.clock.tick();
        self.step(dt)
    }

    /// Run one frame with a delta measured by the host
    pub fn frame_with(&mut self, elapsed: f32) -> Vec<GameEvent> {
        let dt = self.clock.record(elapsed);
        self.step(dt)
    }

    fn step(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();

        let presses: Vec<Press> = self.input.drain_presses().collect();
        for press in presses {
            let command = match press {
                Press::PauseToggle => Some(FlowCommand::PauseToggle),
                Press::Confirm => FlowCommand::confirm_for(self.world.phase),
            };
            if let Some(command) = command {
                events.extend(self.command(command));
            }
        }

        if self.world.phase == GamePhase::Playing {
            let input = self.input.tick_input();
            events.extend(advance(&mut self.world, &input, &self.tuning, dt));
        }

        events
    }

    /// Apply a flow command directly
    pub fn command(&mut self, command: FlowCommand) -> Vec<GameEvent> {
        let before = self.world.phase;
        let mut events = apply_command(&mut self.world, &self.catalog, &self.tuning, command);

        let loaded_next = command == FlowCommand::Advance
            && before == GamePhase::LevelComplete
            && self.world.phase == GamePhase::Menu;
        if loaded_next && self.settings.auto_start_next_level {
            events.extend(apply_command(
                &mut self.world,
                &self.catalog,
                &self.tuning,
                FlowCommand::Start,
            ));
        }

        events
    }

    pub fn phase(&self) -> GamePhase {
        self.world.phase
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::capture(&self.world, self.catalog.len())
    }

    pub fn render(&self, renderer: &mut impl Renderer) {
        renderer.draw(&self.snapshot());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;
    use crate::sim::Goal;

    const SIM_DT: f32 = 1.0 / 60.0;

    fn game() -> Game {
        Game::new(LevelCatalog::builtin(), Tuning::default(), Settings::default())
    }

    fn press(game: &mut Game, key: Key) -> Vec<GameEvent> {
        game.input.key_down(key);
        let events = game.frame_with(SIM_DT);
        game.input.key_up(key);
        events
    }

    /// Park the player inside the goal so the next step completes the level
    fn touch_goal(game: &mut Game) {
        let goal: Goal = game.world.goal;
        game.world.player.rect.x = goal.rect.x;
        game.world.player.rect.y = goal.rect.y;
        game.world.player.vel = glam::Vec2::ZERO;
    }

    #[test]
    fn test_menu_does_not_simulate() {
        let mut game = game();
        let start = game.world.player.rect;
        for _ in 0..10 {
            game.frame_with(SIM_DT);
        }
        assert_eq!(game.phase(), GamePhase::Menu);
        assert_eq!(game.world.player.rect, start);
    }

    #[test]
    fn test_enter_starts_and_simulates() {
        let mut game = game();
        press(&mut game, Key::Enter);
        assert_eq!(game.phase(), GamePhase::Playing);
        // The start frame already steps the simulation
        assert!(game.world.session.level_time > 0.0);
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut game = game();
        press(&mut game, Key::Enter);
        press(&mut game, Key::P);
        assert_eq!(game.phase(), GamePhase::Paused);

        let frozen = game.world.clone();
        game.input.key_down(Key::Right);
        for _ in 0..20 {
            game.frame_with(SIM_DT);
        }
        assert_eq!(game.world.player.rect, frozen.player.rect);
        assert_eq!(game.world.session.level_time, frozen.session.level_time);

        game.input.key_up(Key::Right);
        press(&mut game, Key::P);
        assert_eq!(game.phase(), GamePhase::Playing);
    }

    #[test]
    fn test_stalled_frame_is_clamped() {
        let mut game = game();
        press(&mut game, Key::Enter);
        let before = game.world.session.level_time;
        game.frame_with(2.0);
        let stepped = game.world.session.level_time - before;
        assert!((stepped - game.settings.max_frame_dt).abs() < 1e-6);
    }

    #[test]
    fn test_negative_frame_limit_from_file_still_runs() {
        let settings: Settings = serde_json::from_str(r#"{ "max_frame_dt": -0.05 }"#).unwrap();
        assert!(!settings.validate().is_empty());

        let mut game = Game::new(LevelCatalog::builtin(), Tuning::default(), settings);
        press(&mut game, Key::Enter);
        assert!((game.world.session.level_time - SIM_DT).abs() < 1e-6);

        game.frame_with(2.0);
        let stepped = game.world.session.level_time - SIM_DT;
        assert!((stepped - crate::consts::MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn test_advance_stops_on_title_card_by_default() {
        let mut game = game();
        press(&mut game, Key::Enter);
        touch_goal(&mut game);
        game.frame_with(SIM_DT);
        assert_eq!(game.phase(), GamePhase::LevelComplete);

        press(&mut game, Key::Enter);
        assert_eq!(game.world.level_index, 1);
        assert_eq!(game.phase(), GamePhase::Menu);
    }

    #[test]
    fn test_advance_can_auto_start() {
        let mut game = Game::new(
            LevelCatalog::builtin(),
            Tuning::default(),
            Settings {
                auto_start_next_level: true,
                ..Default::default()
            },
        );
        press(&mut game, Key::Enter);
        touch_goal(&mut game);
        game.frame_with(SIM_DT);

        press(&mut game, Key::Enter);
        assert_eq!(game.world.level_index, 1);
        assert_eq!(game.phase(), GamePhase::Playing);
        assert!(game.world.session.timer_running);
    }

    #[test]
    fn test_full_run_then_restart() {
        let mut game = game();
        for level in 0..game.catalog.len() {
            assert_eq!(game.world.level_index, level);
            press(&mut game, Key::Enter);
            touch_goal(&mut game);
            game.frame_with(SIM_DT);
            assert_eq!(game.phase(), GamePhase::LevelComplete);
            press(&mut game, Key::Enter);
        }
        assert_eq!(game.phase(), GamePhase::GameOver);

        press(&mut game, Key::Enter);
        assert_eq!(game.phase(), GamePhase::Menu);
        assert_eq!(game.world.level_index, 0);
        assert_eq!(game.world.session.score, 0);
    }

    #[test]
    fn test_snapshot_mirrors_world() {
        let game = game();
        let snap = game.snapshot();
        assert_eq!(snap.level_count, 3);
        assert_eq!(snap.level_name, "Beginner Bluffs");
        assert_eq!(snap.coins.len(), 3);
        assert!(!snap.goal_open);
        assert_eq!(snap.lives, 3);
    }
}

//! JumpMan entry point
//!
//! Headless driver: builds the level catalog, runs the game at a steady tick
//! rate and logs what a window would show. Windowing and drawing are left to
//! a front end implementing `jumpman::render::Renderer`.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use clap::Parser;

use jumpman::render::TextRenderer;
use jumpman::sim::{GameEvent, LevelCatalog};
use jumpman::{Game, Settings, Tuning, autopilot};

#[derive(Parser, Debug)]
#[command(name = "jumpman", about = "Retro single-screen platform jumper (headless demo)")]
struct Args {
    /// Driver settings (JSON)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Physics/scoring overrides (JSON)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Level catalog (JSON array of levels); built-in levels if omitted
    #[arg(long)]
    levels: Option<PathBuf>,
    /// Number of frames to run
    #[arg(long, default_value_t = 3600)]
    frames: u32,
    /// Sleep between frames to hold the tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Disable the demo bot (the game then idles on the title card)
    #[arg(long)]
    no_autopilot: bool,
    /// Write the effective settings to this file before running
    #[arg(long, value_name = "PATH")]
    save_settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    log::info!("JumpMan (headless) starting...");

    let settings = match &args.settings {
        Some(path) => {
            let (settings, err) = Settings::load_or_default(path);
            if let Some(e) = err {
                log::warn!("{}: {e}; using default settings", path.display());
            }
            settings
        }
        None => Settings::default(),
    };
    for warning in settings.validate() {
        log::warn!("settings: {warning}");
    }
    if let Some(path) = &args.save_settings {
        settings.save_to_file(path).map_err(|e| anyhow!(e))?;
    }

    let tuning = match &args.tuning {
        Some(path) => {
            let (tuning, err) = Tuning::load_or_default(path);
            if let Some(e) = err {
                log::warn!("{}: {e}; using default tuning", path.display());
            }
            tuning
        }
        None => Tuning::default(),
    };
    for warning in tuning.validate() {
        log::warn!("tuning: {warning}");
    }

    let catalog = match &args.levels {
        Some(path) => LevelCatalog::load_from_file(path).map_err(|e| anyhow!(e))?,
        None => LevelCatalog::builtin(),
    };

    let frame_interval = settings.frame_interval();
    let show_fps = settings.show_fps;
    let mut game = Game::new(catalog, tuning, settings);
    let mut renderer = TextRenderer::new();

    for frame in 0..args.frames {
        let frame_start = Instant::now();

        if !args.no_autopilot {
            let intent = autopilot::decide(&game.world);
            autopilot::apply(&intent, &mut game.input);
        }

        let events = if args.realtime {
            game.frame()
        } else {
            game.frame_with(frame_interval)
        };
        for event in &events {
            log_event(event);
        }
        game.render(&mut renderer);

        if show_fps && args.realtime && frame > 0 && frame % 300 == 0 {
            log::info!("FPS: {:.0}", game.clock.smoothed_fps);
        }

        if args.realtime {
            let spent = frame_start.elapsed();
            let budget = Duration::from_secs_f32(frame_interval);
            if spent < budget {
                thread::sleep(budget - spent);
            }
        }
    }

    let session = &game.world.session;
    log::info!(
        "Stopped after {} frames: level {}, score {}, lives {}",
        args.frames,
        game.world.level_index + 1,
        session.score,
        session.lives
    );
    Ok(())
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::LevelComplete { level_index, time } => {
            log::info!("Cleared level {} in {time:.1}s", level_index + 1)
        }
        GameEvent::GameOver { score } => log::info!("Final score: {score}"),
        GameEvent::PlayerDied { lives_left } => log::info!("Ouch! {lives_left} lives left"),
        other => log::debug!("{other:?}"),
    }
}

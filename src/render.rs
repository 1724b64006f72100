//! Renderer seam and HUD/overlay text
//!
//! Drawing itself belongs to the host. The simulation only promises a
//! read-only [`Snapshot`] per frame; the helpers here turn one into the text
//! every front end shows.

use crate::sim::{GamePhase, Snapshot};

/// Anything that can present a frame
pub trait Renderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>);
}

/// Score, lives, level time and level counter
pub fn hud_lines(snapshot: &Snapshot<'_>) -> [String; 4] {
    [
        format!("Score: {}", snapshot.score),
        format!("Lives: {}", snapshot.lives),
        format!("Time: {:.1}s", snapshot.level_time),
        format!("Level {}/{}", snapshot.level_index + 1, snapshot.level_count),
    ]
}

/// Centered overlay text for the current phase (empty while playing)
pub fn overlay_text(snapshot: &Snapshot<'_>) -> Vec<String> {
    match snapshot.phase {
        GamePhase::Menu => vec![
            "JUMPMAN".to_string(),
            format!("Level: {}", snapshot.level_name),
            "← → to move, Space/↑ to jump".to_string(),
            "P to pause — Press Enter to start".to_string(),
        ],
        GamePhase::Paused => vec!["PAUSED — press P to resume".to_string()],
        GamePhase::LevelComplete => vec!["LEVEL COMPLETE! Press Enter".to_string()],
        GamePhase::GameOver => vec!["GAME OVER — Press Enter for New Game".to_string()],
        GamePhase::Playing => Vec::new(),
    }
}

/// Logs the HUD and overlays whenever they change. Used by the headless binary.
#[derive(Debug, Default)]
pub struct TextRenderer {
    last_overlay: Vec<String>,
    last_hud: Option<[String; 4]>,
    /// Only log HUD changes other than the ticking timer
    pub quiet_timer: bool,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            quiet_timer: true,
            ..Default::default()
        }
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, snapshot: &Snapshot<'_>) {
        let overlay = overlay_text(snapshot);
        if overlay != self.last_overlay {
            for line in &overlay {
                log::info!("| {line}");
            }
            self.last_overlay = overlay;
        }

        let hud = hud_lines(snapshot);
        let changed = match &self.last_hud {
            None => true,
            Some(prev) if self.quiet_timer => {
                prev[0] != hud[0] || prev[1] != hud[1] || prev[3] != hud[3]
            }
            Some(prev) => *prev != hud,
        };
        if changed {
            log::info!("{}", hud.join("  "));
            self.last_hud = Some(hud);
        }
    }
}

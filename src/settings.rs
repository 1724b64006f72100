//! Driver settings and preferences
//!
//! How the frame driver runs the simulation, as opposed to `Tuning`, which
//! controls what the simulation does.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_FRAME_DT, TICK_RATE_HZ};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames per second the driver aims for
    pub tick_rate_hz: f32,
    /// Largest delta handed to a single simulation step (seconds)
    pub max_frame_dt: f32,
    /// Start the next level straight away after "advance" instead of
    /// stopping on its title card
    pub auto_start_next_level: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            max_frame_dt: MAX_FRAME_DT,
            auto_start_next_level: false,
            show_fps: true,
        }
    }
}

impl Settings {
    /// Target frame duration in seconds
    pub fn frame_interval(&self) -> f32 {
        if self.tick_rate_hz > 0.0 {
            1.0 / self.tick_rate_hz
        } else {
            1.0 / TICK_RATE_HZ
        }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read settings: {e}"))?;
        serde_json::from_str(&data).map_err(|e| format!("parse settings JSON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(settings) => (settings, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), String> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| format!("encode settings: {e}"))?;
        fs::write(&path, json).map_err(|e| format!("write settings: {e}"))?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.tick_rate_hz <= 0.0 {
            w.push(format!(
                "tick_rate_hz {} must be > 0; using {TICK_RATE_HZ}",
                self.tick_rate_hz
            ));
        } else if self.tick_rate_hz > 240.0 {
            w.push(format!("tick_rate_hz {} unusually high", self.tick_rate_hz));
        }
        if !(self.max_frame_dt.is_finite() && self.max_frame_dt > 0.0) {
            w.push(format!(
                "max_frame_dt {} must be a positive number; using {MAX_FRAME_DT}",
                self.max_frame_dt
            ));
        } else if self.max_frame_dt > MAX_FRAME_DT {
            w.push(format!(
                "max_frame_dt {} above {MAX_FRAME_DT}; fast falls may tunnel through platforms",
                self.max_frame_dt
            ));
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.validate().is_empty());
        assert!(!settings.auto_start_next_level);
        assert!((settings.frame_interval() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            auto_start_next_level: true,
            tick_rate_hz: 30.0,
            ..Default::default()
        };
        settings.save_to_file(&path).expect("save settings");

        let (loaded, err) = Settings::load_or_default(&path);
        assert!(err.is_none());
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_large_frame_dt_warns() {
        let settings = Settings {
            max_frame_dt: 0.25,
            ..Default::default()
        };
        assert!(settings.validate().iter().any(|w| w.contains("tunnel")));
    }

    #[test]
    fn test_non_positive_frame_dt_warns() {
        for bad in [-0.05, 0.0, f32::NAN] {
            let settings = Settings {
                max_frame_dt: bad,
                ..Default::default()
            };
            assert!(settings.validate().iter().any(|w| w.contains("max_frame_dt")));
        }
    }
}

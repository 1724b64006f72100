//! Frame clock: measures real elapsed time and clamps it for the simulation

use std::time::Instant;

use crate::clamp_dt;
use crate::consts::MAX_FRAME_DT;

const FPS_SAMPLE_COUNT: usize = 60;

pub struct FrameClock {
    /// Largest delta returned by `tick`
    pub max_dt: f32,
    /// Unclamped duration of the last frame
    pub real_dt: f32,
    pub frame_count: u64,
    last_instant: Option<Instant>,

    fps_samples: [f32; FPS_SAMPLE_COUNT],
    fps_sample_index: usize,
    pub smoothed_fps: f32,
}

impl FrameClock {
    /// Create a clock capping steps at `max_dt`. A limit that is not a
    /// positive finite number falls back to `MAX_FRAME_DT`.
    pub fn new(max_dt: f32) -> Self {
        let max_dt = if max_dt.is_finite() && max_dt > 0.0 {
            max_dt
        } else {
            log::warn!("Invalid max frame dt {max_dt}, using {MAX_FRAME_DT}");
            MAX_FRAME_DT
        };
        Self {
            max_dt,
            real_dt: 0.0,
            frame_count: 0,
            last_instant: None,
            fps_samples: [1.0 / 60.0; FPS_SAMPLE_COUNT],
            fps_sample_index: 0,
            smoothed_fps: 60.0,
        }
    }

    /// Measure time since the previous call and return the clamped delta.
    ///
    /// The first call returns 0.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = self
            .last_instant
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_instant = Some(now);
        self.record(elapsed)
    }

    /// Feed an externally measured delta (e.g. from a host timer callback)
    pub fn record(&mut self, elapsed: f32) -> f32 {
        self.real_dt = elapsed;
        self.frame_count += 1;

        if elapsed > self.max_dt {
            log::warn!(
                "Frame took {:.1}ms, clamping step to {:.0}ms",
                elapsed * 1000.0,
                self.max_dt * 1000.0
            );
        }

        // FPS smoothing
        if elapsed > 0.0 {
            self.fps_samples[self.fps_sample_index] = elapsed;
            self.fps_sample_index = (self.fps_sample_index + 1) % FPS_SAMPLE_COUNT;
            let avg: f32 = self.fps_samples.iter().sum::<f32>() / FPS_SAMPLE_COUNT as f32;
            self.smoothed_fps = if avg > 0.0 { 1.0 / avg } else { 0.0 };
        }

        clamp_dt(elapsed, self.max_dt)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = FrameClock::new(0.05);
        assert_eq!(clock.record(0.3), 0.05);
        assert_eq!(clock.real_dt, 0.3);
    }

    #[test]
    fn test_normal_frame_passes_through() {
        let mut clock = FrameClock::new(0.05);
        let dt = clock.record(1.0 / 60.0);
        assert!((dt - 1.0 / 60.0).abs() < 1e-7);
        assert_eq!(clock.frame_count, 1);
    }

    #[test]
    fn test_negative_and_nan_become_zero() {
        let mut clock = FrameClock::new(0.05);
        assert_eq!(clock.record(-0.01), 0.0);
        assert_eq!(clock.record(f32::NAN), 0.0);
    }

    #[test]
    fn test_bad_limit_falls_back_to_default() {
        for bad in [-0.05, 0.0, f32::NAN, f32::INFINITY] {
            let mut clock = FrameClock::new(bad);
            assert_eq!(clock.max_dt, MAX_FRAME_DT);
            assert!((clock.record(1.0 / 60.0) - 1.0 / 60.0).abs() < 1e-7);
            assert_eq!(clock.record(0.3), MAX_FRAME_DT);
        }
    }

    #[test]
    fn test_first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(), 0.0);
        let dt = clock.tick();
        assert!((0.0..=clock.max_dt).contains(&dt));
    }

    #[test]
    fn test_fps_smoothing() {
        let mut clock = FrameClock::new(0.05);
        for _ in 0..FPS_SAMPLE_COUNT {
            clock.record(1.0 / 30.0);
        }
        assert!((clock.smoothed_fps - 30.0).abs() < 0.1);
    }
}

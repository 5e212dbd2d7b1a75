use std::time::Instant;

const FPS_SAMPLE_COUNT: usize = 60;

/// Per-frame wall clock. The simulation itself is frame-stepped (velocity is
/// in NDC per frame), so this exists purely for diagnostics.
pub struct FrameClock {
    last_instant: Instant,
    pub real_dt: f64,
    pub frame_count: u64,

    fps_samples: [f64; FPS_SAMPLE_COUNT],
    fps_sample_index: usize,
    pub smoothed_fps: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_instant: Instant::now(),
            real_dt: 0.0,
            frame_count: 0,
            fps_samples: [1.0 / 60.0; FPS_SAMPLE_COUNT],
            fps_sample_index: 0,
            smoothed_fps: 60.0,
        }
    }

    pub fn begin_frame(&mut self) {
        let now = Instant::now();
        self.real_dt = now.duration_since(self.last_instant).as_secs_f64();
        self.last_instant = now;
        self.frame_count += 1;

        self.fps_samples[self.fps_sample_index] = self.real_dt;
        self.fps_sample_index = (self.fps_sample_index + 1) % FPS_SAMPLE_COUNT;
        let avg_dt: f64 = self.fps_samples.iter().sum::<f64>() / FPS_SAMPLE_COUNT as f64;
        self.smoothed_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_frame_counts_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame_count, 0);
        clock.begin_frame();
        clock.begin_frame();
        assert_eq!(clock.frame_count, 2);
        assert!(clock.real_dt >= 0.0);
    }

    #[test]
    fn smoothed_fps_stays_positive() {
        let mut clock = FrameClock::new();
        for _ in 0..120 {
            clock.begin_frame();
        }
        assert!(clock.smoothed_fps > 0.0);
    }
}

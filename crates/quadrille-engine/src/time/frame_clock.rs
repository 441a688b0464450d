use std::time::{Duration, Instant};

/// Frame timing snapshot.
///
/// Purely diagnostic: transform steps are per-tick constants, so nothing in
/// the frame pipeline scales by `dt`. The runtime uses it for trace logs and
/// the title-bar frame rate.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots and a once-per-second frame
/// rate sample.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,

    window_start: Instant,
    window_frames: u32,
}

const SAMPLE_WINDOW: Duration = Duration::from_secs(1);

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last: now,
            frame_index: 0,
            window_start: now,
            window_frames: 0,
        }
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.window_frames += 1;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }

    /// Returns the measured frame rate when a sampling window (one second)
    /// has just completed, `None` otherwise. Consuming: the window restarts
    /// on each sample.
    pub fn take_fps_sample(&mut self) -> Option<f32> {
        let elapsed = self.last.saturating_duration_since(self.window_start);
        if elapsed < SAMPLE_WINDOW || self.window_frames == 0 {
            return None;
        }

        let fps = self.window_frames as f32 / elapsed.as_secs_f32();
        self.window_start = self.last;
        self.window_frames = 0;
        Some(fps)
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
    fn frame_index_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
    }

    #[test]
    fn fps_sample_requires_a_full_window() {
        let mut clock = FrameClock::new();
        clock.tick();
        // A freshly started window cannot have elapsed a full second.
        assert!(clock.take_fps_sample().is_none());
    }
}

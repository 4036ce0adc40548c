use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Milliseconds since the clock's origin. Monotonic, never clamped.
    pub timestamp_ms: f64,

    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// `timestamp_ms` plays the role of a repaint timestamp: animation code derives
/// its own deltas from it, so a long stall (minimized window, debugger) shows up
/// as one large delta rather than being lost.
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    last: Instant,
    frame_index: u64,
    stall_threshold: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            last: now,
            frame_index: 0,
            stall_threshold: Duration::from_millis(250),
        }
    }

    /// Resets the delta baseline without moving the origin.
    ///
    /// Useful after the window is re-shown; timestamps stay monotonic.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Instant corresponding to a `timestamp_ms` on this clock.
    pub fn instant_at(&self, timestamp_ms: i64) -> Instant {
        self.origin + Duration::from_millis(timestamp_ms.max(0) as u64)
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now.saturating_duration_since(self.last);
        if dt > self.stall_threshold {
            log::debug!("frame stall: {:.0} ms since previous frame", dt.as_secs_f64() * 1000.0);
        }

        self.last = now;

        let ft = FrameTime {
            timestamp_ms: now.saturating_duration_since(self.origin).as_secs_f64() * 1000.0,
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
        };

        self.frame_index = self
            .frame_index
            .wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

use std::time::{Duration, Instant};

/// Simulation rate of the game loop, in ticks per second.
pub const DEFAULT_TICKS_PER_SECOND: f32 = 60.0;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds.
    pub dt: f32,

    /// Total time since the clock started (or was reset), in seconds.
    /// This includes `dt` of the current tick.
    pub elapsed: f32,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

#[derive(Debug, Clone)]
enum Pacing {
    RealTime {
        last: Instant,
        dt_min: Duration,
        dt_max: Duration,
    },
    Fixed {
        step: Duration,
    },
}

/// Frame clock producing `FrameTime` snapshots.
///
/// In real-time mode delta time is clamped, so a debugger pause or a
/// minimized window does not make animations jump.
#[derive(Debug, Clone)]
pub struct FrameClock {
    pacing: Pacing,
    elapsed: f64,
    frame_index: u64,
}

impl FrameClock {
    /// Real-time clock with default clamps (100µs .. 250ms).
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Real-time clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            pacing: Pacing::RealTime { last: Instant::now(), dt_min, dt_max },
            elapsed: 0.0,
            frame_index: 0,
        }
    }

    /// Deterministic clock advancing `1 / ticks_per_second` per tick.
    ///
    /// Non-positive or non-finite rates fall back to [`DEFAULT_TICKS_PER_SECOND`].
    pub fn fixed(ticks_per_second: f32) -> Self {
        let hz = if ticks_per_second.is_finite() && ticks_per_second > 0.0 {
            ticks_per_second
        } else {
            log::warn!(
                "invalid tick rate {ticks_per_second}; using {DEFAULT_TICKS_PER_SECOND}"
            );
            DEFAULT_TICKS_PER_SECOND
        };
        Self {
            pacing: Pacing::Fixed { step: Duration::from_secs_f64(1.0 / hz as f64) },
            elapsed: 0.0,
            frame_index: 0,
        }
    }

    /// Restarts elapsed time and the frame counter.
    pub fn reset(&mut self) {
        if let Pacing::RealTime { last, .. } = &mut self.pacing {
            *last = Instant::now();
        }
        self.elapsed = 0.0;
        self.frame_index = 0;
    }

    /// Total elapsed seconds so far.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let dt = match &mut self.pacing {
            Pacing::RealTime { last, dt_min, dt_max } => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(*last).clamp(*dt_min, *dt_max);
                *last = now;
                dt
            }
            Pacing::Fixed { step } => *step,
        };

        self.elapsed += dt.as_secs_f64();

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: self.elapsed as f32,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::schedule::{ScheduleHandle, TickScheduler};
use crate::time::ClockSource;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Countdown refresh period.
pub const TICK_PERIOD_MS: i64 = MS_PER_SECOND;

/// Remaining time split into display units.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl CountdownParts {
    /// Splits a duration in milliseconds. Negative input reads as zero;
    /// sub-second remainders are truncated.
    pub fn from_millis(remaining_ms: i64) -> Self {
        let ms = remaining_ms.max(0);
        Self {
            days: (ms / MS_PER_DAY) as u64,
            hours: ((ms % MS_PER_DAY) / MS_PER_HOUR) as u8,
            minutes: ((ms % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            seconds: ((ms % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Display strings: days unpadded, the rest two digits.
    pub fn padded(&self) -> [String; 4] {
        [
            self.days.to_string(),
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        ]
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Drift-free countdown to a fixed instant.
///
/// `remaining` is always recomputed as `max(0, target - now)` from a fresh
/// clock sample; late or skipped ticks only delay the refresh, they never
/// accumulate error.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    target_ms: i64,
    remaining_ms: i64,
}

impl CountdownEngine {
    /// Creates the engine with `remaining` already computed for `now_ms`.
    pub fn start(target_ms: i64, now_ms: i64) -> Self {
        let mut engine = Self { target_ms, remaining_ms: 0 };
        engine.tick(now_ms);
        engine
    }

    pub fn tick(&mut self, now_ms: i64) -> CountdownParts {
        self.remaining_ms = self.target_ms.saturating_sub(now_ms).max(0);
        self.parts()
    }

    /// Replaces the deadline and recomputes immediately.
    pub fn retarget(&mut self, target_ms: i64, now_ms: i64) -> CountdownParts {
        self.target_ms = target_ms;
        self.tick(now_ms)
    }

    #[inline]
    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }

    #[inline]
    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    pub fn parts(&self) -> CountdownParts {
        CountdownParts::from_millis(self.remaining_ms)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_ms == 0
    }
}

// ── CountdownTimer ────────────────────────────────────────────────────────

/// A running countdown: the engine plus its 1 Hz timer registration.
///
/// The timer keeps ticking after the deadline; the engine simply keeps
/// reporting zero. Stopping is idempotent and dropping the timer stops it.
pub struct CountdownTimer {
    engine: Rc<RefCell<CountdownEngine>>,
    clock: Rc<dyn ClockSource>,
    handle: Option<ScheduleHandle>,
}

impl CountdownTimer {
    /// Computes the initial value right away, then refreshes every second.
    pub fn start<S>(timers: &mut S, clock: Rc<dyn ClockSource>, target_ms: i64) -> Self
    where
        S: TickScheduler + ?Sized,
    {
        let now = clock.now_ms();
        let engine = Rc::new(RefCell::new(CountdownEngine::start(target_ms, now)));

        let shared = engine.clone();
        let sampler = clock.clone();
        let handle = timers.every(TICK_PERIOD_MS, Box::new(move || {
            if let Ok(mut engine) = shared.try_borrow_mut() {
                engine.tick(sampler.now_ms());
            }
        }));

        log::debug!(
            "countdown timer {} started, {} ms remaining",
            handle.id(),
            engine.borrow().remaining_ms()
        );

        Self { engine, clock, handle: Some(handle) }
    }

    pub fn parts(&self) -> CountdownParts {
        self.engine.borrow().parts()
    }

    pub fn remaining_ms(&self) -> i64 {
        self.engine.borrow().remaining_ms()
    }

    /// Moves the deadline; the new value is visible without waiting for a tick.
    pub fn retarget(&self, target_ms: i64) -> CountdownParts {
        self.engine
            .borrow_mut()
            .retarget(target_ms, self.clock.now_ms())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            log::debug!("countdown timer {} stopped", handle.id());
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for CountdownTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("engine", &self.engine)
            .field("handle", &self.handle)
            .finish()
    }
}

use std::cell::Cell;
use std::rc::Rc;

/// Wall-clock source, in milliseconds since the UNIX epoch.
///
/// Reads must be side-effect free; several engines may sample the same
/// source within one callback.
pub trait ClockSource {
    fn now_ms(&self) -> i64;
}

/// The system wall clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying instant, so a test can hold one copy
/// while the engine under test samples another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, now_ms: i64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl ClockSource for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

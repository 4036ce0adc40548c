use super::handle::ScheduleHandle;

/// Callback invoked on each period of an interval timer.
pub type TickCallback = Box<dyn FnMut()>;

/// Host capability: run a callback every `period_ms` of host time.
///
/// Host time is the monotonic frame timestamp, never the wall clock; callbacks
/// that need the calendar time sample their own `ClockSource`.
pub trait TickScheduler {
    fn every(&mut self, period_ms: i64, callback: TickCallback) -> ScheduleHandle;
}

struct TimerEntry {
    handle: ScheduleHandle,
    period_ms: i64,
    due_ms: i64,
    callback: TickCallback,
}

/// Fixed-period timers polled by the host loop.
///
/// A timer fires at most once per [`poll`](IntervalTimers::poll) and is then
/// re-armed one period after the poll time, so a host that was suspended for a
/// minute delivers one catch-up tick rather than sixty. A timer never waits
/// longer than one period past the latest poll, even if host time goes back.
#[derive(Default)]
pub struct IntervalTimers {
    entries: Vec<TimerEntry>,
    next_id: u64,
    now_ms: i64,
}

impl IntervalTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires every live timer whose due time has been reached.
    pub fn poll(&mut self, now_ms: i64) {
        if now_ms < self.now_ms {
            log::debug!("host time went back {} ms, re-arming timers", self.now_ms - now_ms);
        }
        self.now_ms = now_ms;
        self.entries.retain(|e| !e.handle.is_cancelled());

        for entry in &mut self.entries {
            if entry.handle.is_cancelled() {
                continue;
            }
            if entry.due_ms.saturating_sub(now_ms) > entry.period_ms {
                entry.due_ms = now_ms + entry.period_ms;
            }
            if now_ms < entry.due_ms {
                continue;
            }
            entry.due_ms = now_ms + entry.period_ms;
            (entry.callback)();
        }
    }

    /// Earliest due time among live timers, in host time.
    pub fn next_due(&self) -> Option<i64> {
        self.entries
            .iter()
            .filter(|e| !e.handle.is_cancelled())
            .map(|e| e.due_ms)
            .min()
    }

    pub fn live(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| !e.handle.is_cancelled())
            .count()
    }

    pub fn is_idle(&self) -> bool {
        self.live() == 0
    }
}

impl TickScheduler for IntervalTimers {
    /// Arms the timer one period after the latest poll.
    fn every(&mut self, period_ms: i64, callback: TickCallback) -> ScheduleHandle {
        // A zero or negative period would fire on every poll.
        let period_ms = period_ms.max(1);
        let handle = ScheduleHandle::new(self.next_id);
        self.next_id += 1;
        self.entries.push(TimerEntry {
            handle: handle.clone(),
            period_ms,
            due_ms: self.now_ms + period_ms,
            callback,
        });
        handle
    }
}

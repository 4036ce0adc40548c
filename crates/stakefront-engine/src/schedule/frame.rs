use super::handle::ScheduleHandle;

/// Callback invoked once per paint opportunity with a monotonic timestamp in ms.
pub type FrameCallback = Box<dyn FnMut(f64)>;

/// Host capability: run a callback before every repaint until cancelled.
pub trait FrameScheduler {
    fn request_frames(&mut self, callback: FrameCallback) -> ScheduleHandle;
}

struct FrameEntry {
    handle: ScheduleHandle,
    callback: FrameCallback,
}

/// Registry of per-frame callbacks driven by the host's redraw loop.
///
/// The host calls [`FrameLoop::run`] exactly once per presented frame.
#[derive(Default)]
pub struct FrameLoop {
    entries: Vec<FrameEntry>,
    next_id: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invokes every live callback with `timestamp_ms`, in registration order.
    pub fn run(&mut self, timestamp_ms: f64) {
        self.entries.retain(|e| !e.handle.is_cancelled());

        for entry in &mut self.entries {
            // A callback earlier in this pass may have cancelled a later one.
            if entry.handle.is_cancelled() {
                continue;
            }
            (entry.callback)(timestamp_ms);
        }
    }

    /// Number of callbacks that will run on the next frame.
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

impl FrameScheduler for FrameLoop {
    fn request_frames(&mut self, callback: FrameCallback) -> ScheduleHandle {
        let handle = ScheduleHandle::new(self.next_id);
        self.next_id += 1;
        self.entries.push(FrameEntry { handle: handle.clone(), callback });
        handle
    }
}

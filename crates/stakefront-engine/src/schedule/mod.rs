//! Cooperative, single-threaded callback scheduling.
//!
//! Two capabilities are exposed as traits so animation code never depends on
//! a concrete host:
//! - [`FrameScheduler`]: invoke a callback once per paint opportunity
//! - [`TickScheduler`]: invoke a callback on a fixed period of monotonic host time
//!
//! Every registration returns a [`ScheduleHandle`]. Cancelling the handle is
//! idempotent and takes effect before the next invocation; the scheduler drops
//! cancelled entries lazily on its next run.

mod frame;
mod handle;
mod interval;

pub use frame::{FrameCallback, FrameLoop, FrameScheduler};
pub use handle::ScheduleHandle;
pub use interval::{IntervalTimers, TickCallback, TickScheduler};

//! Time subsystem.
//!
//! Two notions of time are kept apart:
//! - `FrameClock` produces monotonic per-frame timestamps for animation and
//!   interval timers
//! - `ClockSource` samples the wall clock for deadline arithmetic
//!
//! Intended usage:
//! - one `FrameClock` per window; call `tick()` once per presented frame
//! - share one `ClockSource` between everything that compares against a deadline

mod clock;
mod frame_clock;

pub use clock::{ClockSource, ManualClock, SystemClock};
pub use frame_clock::{FrameClock, FrameTime};

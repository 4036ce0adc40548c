use std::rc::Rc;

use crate::coords::Viewport;
use crate::schedule::{FrameScheduler, TickScheduler};
use crate::time::{ClockSource, FrameTime};
use crate::window::RuntimeCtx;

/// Host capabilities lent to the app while it (re)starts or stops loops.
pub struct HostCtx<'a> {
    pub frames:   &'a mut dyn FrameScheduler,
    pub timers:   &'a mut dyn TickScheduler,
    pub clock:    Rc<dyn ClockSource>,
    pub viewport: Viewport,
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub time:     FrameTime,
    pub viewport: Viewport,
    pub runtime:  &'a mut RuntimeCtx,
}

use crate::input::HostEvent;

use super::ctx::{FrameCtx, HostCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Call order per host lifetime: `on_mount` once, then any interleaving of
/// `on_event` and `on_frame`, then `on_unmount` once.
pub trait App {
    /// Called once before the first frame. Start loops here.
    fn on_mount(&mut self, host: &mut HostCtx<'_>);

    /// Called for translated window events.
    fn on_event(&mut self, event: &HostEvent, host: &mut HostCtx<'_>) -> AppControl {
        let _ = (event, host);
        AppControl::Continue
    }

    /// Called once per presented frame, after scheduled callbacks have run.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called once when the host goes away. Every loop started must be stopped.
    fn on_unmount(&mut self);
}

use std::rc::Rc;

use crate::coords::Viewport;
use crate::input::HostEvent;
use crate::schedule::{FrameLoop, IntervalTimers};
use crate::time::{ClockSource, FrameTime};
use crate::window::RuntimeCtx;

use super::app::{App, AppControl};
use super::ctx::{FrameCtx, HostCtx};

/// Schedulers, clock and viewport for one mounted app.
///
/// The host owns the callback registries; the app only owns the handles it
/// was given. Each paint opportunity runs, in order: due interval timers,
/// frame callbacks, then `App::on_frame`. Both registries run on the frame
/// timestamp; only the app's own code reads the wall clock.
pub struct Host {
    frames:   FrameLoop,
    timers:   IntervalTimers,
    clock:    Rc<dyn ClockSource>,
    viewport: Viewport,
    mounted:  bool,
}

impl Host {
    pub fn new(clock: Rc<dyn ClockSource>, viewport: Viewport) -> Self {
        Self {
            frames: FrameLoop::new(),
            timers: IntervalTimers::new(),
            clock,
            viewport,
            mounted: false,
        }
    }

    fn ctx(&mut self) -> HostCtx<'_> {
        HostCtx {
            frames:   &mut self.frames,
            timers:   &mut self.timers,
            clock:    self.clock.clone(),
            viewport: self.viewport,
        }
    }

    /// Mounts `app`. A second call without an unmount in between is ignored.
    pub fn mount<A: App + ?Sized>(&mut self, app: &mut A) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        let mut ctx = self.ctx();
        app.on_mount(&mut ctx);
    }

    /// Unmounts `app`. Safe to call when not mounted.
    pub fn unmount<A: App + ?Sized>(&mut self, app: &mut A) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        app.on_unmount();

        if !self.frames.is_idle() || !self.timers.is_idle() {
            log::warn!(
                "app unmounted with live callbacks: {} frame, {} interval",
                self.frames.live(),
                self.timers.live(),
            );
        }
    }

    /// Delivers `event`, tracking the viewport first so the app sees the new size.
    pub fn dispatch<A: App + ?Sized>(&mut self, app: &mut A, event: &HostEvent) -> AppControl {
        if let HostEvent::Resized(viewport) = event {
            self.viewport = *viewport;
        }
        if !self.mounted {
            return AppControl::Continue;
        }
        let mut ctx = self.ctx();
        app.on_event(event, &mut ctx)
    }

    /// Drives one paint opportunity.
    pub fn frame<A: App + ?Sized>(
        &mut self,
        app: &mut A,
        time: FrameTime,
        runtime: &mut RuntimeCtx,
    ) -> AppControl {
        if !self.mounted {
            return AppControl::Continue;
        }

        self.timers.poll(time.timestamp_ms as i64);
        self.frames.run(time.timestamp_ms);

        let mut ctx = FrameCtx {
            time,
            viewport: self.viewport,
            runtime,
        };
        app.on_frame(&mut ctx)
    }

    /// Frame timestamp at which the next interval timer is due.
    pub fn next_timer_due(&self) -> Option<i64> {
        self.timers.next_due()
    }

    /// Whether any frame callback needs a paint opportunity right away.
    pub fn wants_frames(&self) -> bool {
        self.mounted && !self.frames.is_idle()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Live frame and interval callbacks, in that order.
    pub fn live_callbacks(&self) -> (usize, usize) {
        (self.frames.live(), self.timers.live())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{CountdownTimer, MarqueeAnimator, MarqueeLoop, MarqueeSpeed};
    use crate::time::ManualClock;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Probe {
        mounts: u32,
        unmounts: u32,
        frames: u32,
        marquee: Option<MarqueeLoop>,
        countdown: Option<CountdownTimer>,
        last_viewport: Option<Viewport>,
    }

    impl App for Probe {
        fn on_mount(&mut self, host: &mut HostCtx<'_>) {
            self.mounts += 1;
            let animator = MarqueeAnimator::initialize(vec!['x'], MarqueeSpeed::default())
                .map(|a| Rc::new(RefCell::new(a)));
            self.marquee = animator.map(|a| MarqueeLoop::start(&mut *host.frames, a));
            self.countdown = Some(CountdownTimer::start(&mut *host.timers, host.clock.clone(), 60_000));
        }

        fn on_event(&mut self, event: &HostEvent, host: &mut HostCtx<'_>) -> AppControl {
            if let HostEvent::Resized(_) = event {
                self.last_viewport = Some(host.viewport);
            }
            AppControl::Continue
        }

        fn on_frame(&mut self, _ctx: &mut FrameCtx<'_>) -> AppControl {
            self.frames += 1;
            AppControl::Continue
        }

        fn on_unmount(&mut self) {
            self.unmounts += 1;
            if let Some(m) = self.marquee.as_mut() {
                m.stop();
            }
            if let Some(c) = self.countdown.as_mut() {
                c.stop();
            }
        }
    }

    fn frame_at(ms: f64, index: u64) -> FrameTime {
        FrameTime { timestamp_ms: ms, dt: 0.016, frame_index: index }
    }

    #[test]
    fn mount_and_unmount_are_each_delivered_once() {
        let mut host = Host::new(Rc::new(ManualClock::new(0)), Viewport::new(1024.0, 768.0));
        let mut app = Probe::default();

        host.mount(&mut app);
        host.mount(&mut app);
        assert_eq!(host.live_callbacks(), (1, 1));

        host.unmount(&mut app);
        host.unmount(&mut app);
        assert_eq!((app.mounts, app.unmounts), (1, 1));
        assert_eq!(host.live_callbacks(), (0, 0));
    }

    #[test]
    fn frames_are_skipped_until_mounted() {
        let mut host = Host::new(Rc::new(ManualClock::new(0)), Viewport::new(800.0, 600.0));
        let mut app = Probe::default();
        let mut rt = RuntimeCtx::default();

        host.frame(&mut app, frame_at(0.0, 0), &mut rt);
        host.mount(&mut app);
        host.frame(&mut app, frame_at(16.0, 1), &mut rt);
        assert_eq!(app.frames, 1);
    }

    #[test]
    fn resize_updates_viewport_before_dispatch() {
        let mut host = Host::new(Rc::new(ManualClock::new(0)), Viewport::new(800.0, 600.0));
        let mut app = Probe::default();
        host.mount(&mut app);

        let vp = Viewport::new(375.0, 812.0);
        host.dispatch(&mut app, &HostEvent::Resized(vp));
        assert_eq!(app.last_viewport, Some(vp));
        assert_eq!(host.viewport(), vp);
    }

    #[test]
    fn next_timer_due_tracks_the_countdown() {
        let clock = ManualClock::new(5_000);
        let mut host = Host::new(Rc::new(clock.clone()), Viewport::new(800.0, 600.0));
        let mut app = Probe::default();
        let mut rt = RuntimeCtx::default();
        host.mount(&mut app);
        assert_eq!(host.next_timer_due(), Some(1_000));

        clock.advance(1_000);
        host.frame(&mut app, frame_at(1_000.0, 0), &mut rt);
        assert_eq!(host.next_timer_due(), Some(2_000));
    }

    #[test]
    fn timers_follow_frame_time_not_wall_clock() {
        let clock = ManualClock::new(50_000);
        let mut host = Host::new(Rc::new(clock.clone()), Viewport::new(800.0, 600.0));
        let mut app = Probe::default();
        let mut rt = RuntimeCtx::default();
        host.mount(&mut app);

        clock.set(-3_600_000);
        host.frame(&mut app, frame_at(1_000.0, 0), &mut rt);
        assert_eq!(host.next_timer_due(), Some(2_000));
        let countdown = app.countdown.as_ref().map(|c| c.remaining_ms());
        assert_eq!(countdown, Some(60_000 + 3_600_000));
    }

    #[test]
    fn wants_frames_only_while_mounted_with_a_frame_callback() {
        let mut host = Host::new(Rc::new(ManualClock::new(0)), Viewport::new(800.0, 600.0));
        let mut app = Probe::default();
        assert!(!host.wants_frames());

        host.mount(&mut app);
        assert!(host.wants_frames());

        if let Some(m) = app.marquee.as_mut() {
            m.stop();
        }
        assert!(!host.wants_frames());
        assert_eq!(host.next_timer_due(), Some(1_000));
    }
}

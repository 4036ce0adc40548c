use std::cell::RefCell;
use std::rc::Rc;

use crate::schedule::{FrameScheduler, ScheduleHandle};

/// How many times the source items are repeated in the rendered strip.
///
/// Two copies leave a visible gap when the viewport is wider than one cycle
/// while the strip is mid-scroll; three cover every practical viewport.
pub const COPIES: usize = 3;

/// Scroll velocity of a marquee.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MarqueeSpeed {
    /// Constant velocity in logical pixels per second.
    PixelsPerSecond(f64),
    /// Item slots (item width + gap) per second, resolved once measured.
    SlotsPerSecond(f64),
}

impl MarqueeSpeed {
    /// Velocity in px/s for a given slot width. Never negative, never NaN.
    pub fn resolve(self, slot_width: f64) -> f64 {
        let v = match self {
            MarqueeSpeed::PixelsPerSecond(px) => px,
            MarqueeSpeed::SlotsPerSecond(slots) => slots * slot_width,
        };
        if v.is_finite() { v.max(0.0) } else { 0.0 }
    }
}

impl Default for MarqueeSpeed {
    fn default() -> Self {
        MarqueeSpeed::SlotsPerSecond(1.0)
    }
}

/// Constant-velocity horizontal scroll over a repeating item strip.
///
/// Lifecycle:
/// 1. [`initialize`](Self::initialize) with the source items
/// 2. [`measure`](Self::measure) once the rendered strip has been laid out
/// 3. [`tick`](Self::tick) once per frame with a monotonic timestamp
///
/// `offset` stays in `(-cycle_width, 0]`. Until a positive width has been
/// measured, `tick` does nothing.
#[derive(Debug, Clone)]
pub struct MarqueeAnimator<T> {
    items: Vec<T>,
    rendered: Vec<T>,
    speed: MarqueeSpeed,
    gap: f64,

    item_width: f64,
    cycle_width: f64,
    velocity: f64,

    offset: f64,
    last_timestamp: Option<f64>,
}

impl<T: Clone> MarqueeAnimator<T> {
    /// Builds the rendered strip from `items`.
    ///
    /// Returns `None` for an empty item set: there is nothing to scroll and no
    /// cycle width to wrap against.
    pub fn initialize(items: Vec<T>, speed: MarqueeSpeed) -> Option<Self> {
        if items.is_empty() {
            log::warn!("marquee has no items; animation not started");
            return None;
        }

        let rendered = items
            .iter()
            .cycle()
            .take(items.len() * COPIES)
            .cloned()
            .collect();

        Some(Self {
            items,
            rendered,
            speed,
            gap: 0.0,
            item_width: 0.0,
            cycle_width: 0.0,
            velocity: 0.0,
            offset: 0.0,
            last_timestamp: None,
        })
    }
}

impl<T> MarqueeAnimator<T> {
    /// Sets the fixed spacing between items, in logical pixels.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
        self
    }

    /// Reads the laid-out width of one source item and derives the cycle width.
    ///
    /// Items are assumed to share a width, so only the first is measured. A
    /// width that is not a positive finite number (element not laid out yet)
    /// leaves the animator unmeasured. Returns whether the animator is ready.
    pub fn measure<F>(&mut self, width_of: F) -> bool
    where
        F: FnOnce(&T) -> f64,
    {
        let Some(first) = self.items.first() else {
            return false;
        };

        let width = width_of(first);
        self.last_timestamp = None;

        if !(width.is_finite() && width > 0.0) {
            log::debug!("marquee measured width {width}; waiting for layout");
            self.item_width = 0.0;
            self.cycle_width = 0.0;
            self.velocity = 0.0;
            return false;
        }

        let slot = width + self.gap;
        self.item_width = width;
        self.cycle_width = self.items.len() as f64 * slot;
        self.velocity = self.speed.resolve(slot);
        self.offset = wrap(self.offset, self.cycle_width);

        log::debug!(
            "marquee measured: {} items, slot {slot}px, cycle {}px, {}px/s",
            self.items.len(),
            self.cycle_width,
            self.velocity,
        );
        true
    }

    /// Advances the strip to `now_ms` and returns the new offset.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if self.cycle_width <= 0.0 || !now_ms.is_finite() {
            return self.offset;
        }

        let delta = match self.last_timestamp {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        // An out-of-order timestamp must not inflate the next delta.
        self.last_timestamp = Some(self.last_timestamp.map_or(now_ms, |last| last.max(now_ms)));

        self.offset = wrap(self.offset - self.velocity * delta / 1000.0, self.cycle_width);
        self.offset
    }

    /// CSS-style transform for the current offset.
    pub fn transform(&self) -> String {
        // `+ 0.0` folds negative zero so the first frame reads `0.000px`.
        format!("translate3d({:.3}px, 0, 0)", self.offset + 0.0)
    }

    #[inline]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The strip as it should be rendered: the source items, three times over.
    #[inline]
    pub fn rendered_items(&self) -> &[T] {
        &self.rendered
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn item_width(&self) -> f64 {
        self.item_width
    }

    #[inline]
    pub fn gap(&self) -> f64 {
        self.gap
    }

    #[inline]
    pub fn cycle_width(&self) -> f64 {
        self.cycle_width
    }

    /// Resolved velocity in px/s; zero until measured.
    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn is_measured(&self) -> bool {
        self.cycle_width > 0.0
    }
}

/// Brings `offset` back into `(-cycle, 0]`.
///
/// A single crossing adds one cycle back so the fractional position survives;
/// a delta spanning several cycles falls through to the remainder.
fn wrap(offset: f64, cycle: f64) -> f64 {
    if cycle <= 0.0 {
        return offset;
    }
    let mut offset = offset.min(0.0);
    if offset <= -cycle {
        offset += cycle;
        if offset <= -cycle {
            offset %= cycle;
        }
    }
    offset
}

// ── MarqueeLoop ───────────────────────────────────────────────────────────

/// A running marquee: the frame registration that ticks a shared animator.
///
/// Returned by [`MarqueeLoop::start`] and owned by the caller. Stopping is
/// idempotent, and dropping the loop stops it.
#[derive(Debug)]
pub struct MarqueeLoop {
    handle: Option<ScheduleHandle>,
}

impl MarqueeLoop {
    /// Registers `animator` with `frames`; it is ticked on every frame until stopped.
    pub fn start<S, T>(frames: &mut S, animator: Rc<RefCell<MarqueeAnimator<T>>>) -> Self
    where
        S: FrameScheduler + ?Sized,
        T: 'static,
    {
        let handle = frames.request_frames(Box::new(move |timestamp_ms: f64| {
            // Skip the frame rather than panic if the view is reading the state.
            if let Ok(mut animator) = animator.try_borrow_mut() {
                animator.tick(timestamp_ms);
            }
        }));
        log::debug!("marquee loop {} started", handle.id());
        Self { handle: Some(handle) }
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
            log::debug!("marquee loop {} stopped", handle.id());
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for MarqueeLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::FrameLoop;
    use proptest::prelude::*;

    const EPS: f64 = 1e-6;

    /// Four 90px logos with a 10px gap: slot 100px, cycle 400px.
    fn measured(speed: MarqueeSpeed) -> MarqueeAnimator<&'static str> {
        let mut m = MarqueeAnimator::initialize(vec!["a", "b", "c", "d"], speed)
            .unwrap()
            .with_gap(10.0);
        assert!(m.measure(|_| 90.0));
        m
    }

    // ── initialize ────────────────────────────────────────────────────────

    #[test]
    fn rendered_strip_is_three_copies_in_order() {
        let m = MarqueeAnimator::initialize(vec![1, 2, 3], MarqueeSpeed::default()).unwrap();
        assert_eq!(m.rendered_items(), &[1, 2, 3, 1, 2, 3, 1, 2, 3]);
        assert_eq!(m.items(), &[1, 2, 3]);
    }

    #[test]
    fn empty_items_refuse_to_initialize() {
        assert!(MarqueeAnimator::<u8>::initialize(Vec::new(), MarqueeSpeed::default()).is_none());
    }

    // ── measure ───────────────────────────────────────────────────────────

    #[test]
    fn cycle_width_is_items_times_slot() {
        let m = measured(MarqueeSpeed::default());
        assert_eq!(m.item_width(), 90.0);
        assert_eq!(m.cycle_width(), 400.0);
        // Default speed: one slot per second.
        assert_eq!(m.velocity(), 100.0);
    }

    #[test]
    fn single_item_still_has_nonzero_cycle() {
        let mut m = MarqueeAnimator::initialize(vec!["only"], MarqueeSpeed::PixelsPerSecond(50.0))
            .unwrap()
            .with_gap(10.0);
        assert!(m.measure(|_| 120.0));
        assert_eq!(m.cycle_width(), 130.0);
    }

    #[test]
    fn zero_or_nan_width_leaves_animator_unmeasured() {
        let mut m = MarqueeAnimator::initialize(vec!["a"], MarqueeSpeed::default())
            .unwrap()
            .with_gap(10.0);
        assert!(!m.measure(|_| 0.0));
        assert!(!m.is_measured());
        assert!(!m.measure(|_| f64::NAN));
        assert_eq!(m.cycle_width(), 0.0);
    }

    #[test]
    fn negative_speed_is_treated_as_stopped() {
        let m = measured(MarqueeSpeed::PixelsPerSecond(-40.0));
        assert_eq!(m.velocity(), 0.0);
    }

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn tick_before_measure_is_noop() {
        let mut m = MarqueeAnimator::initialize(vec!["a", "b"], MarqueeSpeed::default()).unwrap();
        assert_eq!(m.tick(0.0), 0.0);
        assert_eq!(m.tick(1_000.0), 0.0);
        assert!(!m.offset().is_nan());
    }

    #[test]
    fn first_tick_only_sets_baseline() {
        let mut m = measured(MarqueeSpeed::PixelsPerSecond(100.0));
        assert_eq!(m.tick(5_000.0), 0.0);
        assert!((m.tick(5_500.0) + 50.0).abs() < EPS);
    }

    #[test]
    fn velocity_is_frame_rate_independent() {
        let mut coarse = measured(MarqueeSpeed::PixelsPerSecond(60.0));
        let mut fine = measured(MarqueeSpeed::PixelsPerSecond(60.0));

        coarse.tick(0.0);
        coarse.tick(3_000.0);

        fine.tick(0.0);
        let mut t = 0.0;
        for step in [16.7, 33.3, 8.0, 100.0, 1_000.0, 1_842.0] {
            t += step;
            fine.tick(t);
        }

        assert!((coarse.offset() + 180.0).abs() < EPS);
        assert!((fine.offset() - coarse.offset()).abs() < EPS);
    }

    #[test]
    fn wraparound_adds_cycle_back_instead_of_resetting() {
        let mut m = measured(MarqueeSpeed::PixelsPerSecond(100.0));
        m.tick(0.0);
        m.tick(3_500.0);
        let before = m.offset();
        assert!((before + 350.0).abs() < EPS);

        // 0.8 s at 100 px/s = 80 px, crossing -400.
        let after = m.tick(4_300.0);
        assert!((after - (before - 80.0 + 400.0)).abs() < EPS);
        assert!(after < 0.0);
    }

    #[test]
    fn delta_spanning_many_cycles_stays_in_range() {
        let mut m = measured(MarqueeSpeed::PixelsPerSecond(100.0));
        m.tick(0.0);
        // 1234.5 s => 123450 px => 308 cycles + 250 px.
        let after = m.tick(1_234_500.0);
        assert!((after + 250.0).abs() < 1e-3);
    }

    #[test]
    fn out_of_order_timestamp_does_not_move_backwards() {
        let mut m = measured(MarqueeSpeed::PixelsPerSecond(100.0));
        m.tick(1_000.0);
        m.tick(1_100.0);
        let at = m.offset();
        assert_eq!(m.tick(900.0), at);
        assert!((m.tick(1_200.0) - (at - 10.0)).abs() < EPS);
    }

    #[test]
    fn remeasure_keeps_offset_inside_new_cycle() {
        let mut m = measured(MarqueeSpeed::PixelsPerSecond(100.0));
        m.tick(0.0);
        m.tick(3_000.0); // -300
        assert!(m.measure(|_| 40.0)); // cycle 200
        assert!(m.offset() > -200.0 && m.offset() <= 0.0);
    }

    #[test]
    fn transform_formats_offset() {
        let mut m = measured(MarqueeSpeed::PixelsPerSecond(100.0));
        assert_eq!(m.transform(), "translate3d(0.000px, 0, 0)");
        m.tick(0.0);
        m.tick(125.0);
        assert_eq!(m.transform(), "translate3d(-12.500px, 0, 0)");
    }

    // ── MarqueeLoop ───────────────────────────────────────────────────────

    #[test]
    fn loop_ticks_until_stopped() {
        let mut frames = FrameLoop::new();
        let animator = Rc::new(RefCell::new(measured(MarqueeSpeed::PixelsPerSecond(100.0))));
        let mut running = MarqueeLoop::start(&mut frames, animator.clone());

        frames.run(0.0);
        frames.run(1_000.0);
        assert!((animator.borrow().offset() + 100.0).abs() < EPS);

        running.stop();
        frames.run(2_000.0);
        assert!((animator.borrow().offset() + 100.0).abs() < EPS);
        assert!(frames.is_idle());
    }

    #[test]
    fn stop_twice_is_harmless() {
        let mut frames = FrameLoop::new();
        let animator = Rc::new(RefCell::new(measured(MarqueeSpeed::default())));
        let mut running = MarqueeLoop::start(&mut frames, animator);
        running.stop();
        running.stop();
        assert!(!running.is_running());
        assert!(frames.is_idle());
    }

    #[test]
    fn dropping_loop_cancels_registration() {
        let mut frames = FrameLoop::new();
        let animator = Rc::new(RefCell::new(measured(MarqueeSpeed::default())));
        {
            let _running = MarqueeLoop::start(&mut frames, animator);
            assert_eq!(frames.live(), 1);
        }
        assert!(frames.is_idle());
    }

    #[test]
    fn borrowed_animator_skips_frame_without_panicking() {
        let mut frames = FrameLoop::new();
        let animator = Rc::new(RefCell::new(measured(MarqueeSpeed::PixelsPerSecond(100.0))));
        let _running = MarqueeLoop::start(&mut frames, animator.clone());

        frames.run(0.0);
        {
            let _reader = animator.borrow();
            frames.run(500.0);
        }
        frames.run(1_000.0);
        assert!((animator.borrow().offset() + 100.0).abs() < EPS);
    }

    // ── properties ────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn offset_never_leaves_cycle_bounds(
            width in 1.0f64..400.0,
            gap in 0.0f64..40.0,
            n in 1usize..12,
            velocity in 0.0f64..5_000.0,
            deltas in prop::collection::vec(0.001f64..100_000.0, 1..64),
        ) {
            let mut m = MarqueeAnimator::initialize(vec![(); n], MarqueeSpeed::PixelsPerSecond(velocity))
                .unwrap()
                .with_gap(gap);
            prop_assert!(m.measure(|_| width));
            let cycle = m.cycle_width();

            let mut t = 0.0;
            m.tick(t);
            for d in deltas {
                t += d;
                let offset = m.tick(t);
                prop_assert!(offset <= 0.0, "offset {} above 0", offset);
                prop_assert!(offset > -cycle, "offset {} at or below -{}", offset, cycle);
            }
        }

        #[test]
        fn distance_matches_velocity_without_wrap(
            velocity in 1.0f64..200.0,
            splits in prop::collection::vec(1.0f64..50.0, 1..20),
        ) {
            // Cycle of 1e6 px: nothing here travels far enough to wrap.
            let mut m = MarqueeAnimator::initialize(vec![()], MarqueeSpeed::PixelsPerSecond(velocity))
                .unwrap();
            prop_assert!(m.measure(|_| 1_000_000.0));

            let mut t = 0.0;
            m.tick(t);
            for s in &splits {
                t += s;
                m.tick(t);
            }
            let expected = velocity * t / 1000.0;
            prop_assert!((m.offset().abs() - expected).abs() < 1e-6 * expected.max(1.0));
        }
    }
}

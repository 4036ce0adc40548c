use std::cell::RefCell;
use std::rc::Rc;

use stakefront_engine::anim::{MarqueeAnimator, MarqueeLoop, MarqueeSpeed};
use stakefront_engine::schedule::FrameScheduler;

use crate::config::{Sponsor, StripMetrics};
use crate::view::MarqueeView;

/// The running sponsor marquee for one layout variant.
///
/// A strip is never re-measured in place: a layout change stops it and a new
/// strip is started, so the old frame registration cannot touch the new state.
pub struct SponsorStrip {
    animator: Rc<RefCell<MarqueeAnimator<Sponsor>>>,
    running: MarqueeLoop,
    metrics: StripMetrics,
}

impl SponsorStrip {
    /// Starts a strip, or returns `None` when there are no sponsors.
    pub fn start<S>(
        sponsors: &[Sponsor],
        speed: MarqueeSpeed,
        metrics: StripMetrics,
        frames: &mut S,
    ) -> Option<Self>
    where
        S: FrameScheduler + ?Sized,
    {
        let animator = MarqueeAnimator::initialize(sponsors.to_vec(), speed)?
            .with_gap(metrics.gap as f64);
        let animator = Rc::new(RefCell::new(animator));
        let running = MarqueeLoop::start(frames, animator.clone());

        Some(Self { animator, running, metrics })
    }

    /// True until a layout pass has produced a usable width.
    pub fn needs_measure(&self) -> bool {
        !self.animator.borrow().is_measured()
    }

    /// Measures the laid-out strip. Every banner shares the variant's width.
    pub fn measure(&mut self) -> bool {
        let width = self.metrics.banner_width as f64;
        self.animator.borrow_mut().measure(|_| width)
    }

    pub fn stop(&mut self) {
        self.running.stop();
    }

    pub fn is_running(&self) -> bool {
        self.running.is_running()
    }

    pub fn view(&self) -> MarqueeView {
        let animator = self.animator.borrow();
        MarqueeView {
            offset: animator.offset(),
            transform: animator.transform(),
            rendered_ids: animator
                .rendered_items()
                .iter()
                .map(|s| s.id.clone())
                .collect(),
            banner_width: self.metrics.banner_width,
            gap: self.metrics.gap,
        }
    }
}

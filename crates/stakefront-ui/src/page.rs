use stakefront_engine::core::{App, AppControl, FrameCtx, HostCtx};
use stakefront_engine::input::{HostEvent, Key};

use crate::config::PageConfig;
use crate::countdown::CountdownPanel;
use crate::faq::FaqPanel;
use crate::layout::ViewportClass;
use crate::scroll::ScrollToTop;
use crate::sponsors::SponsorStrip;
use crate::view::PageView;

/// The staking landing page.
///
/// Owns the lifecycle of both animated sections:
/// - mount starts the sponsor strip and the countdown
/// - the first frame after a (re)start measures the strip
/// - a resize that crosses the breakpoint stops the strip and starts a fresh one
/// - unmount stops both
pub struct LandingPage {
    config: PageConfig,
    class: ViewportClass,
    strip: Option<SponsorStrip>,
    countdown: Option<CountdownPanel>,
    faq: FaqPanel,
    scroll: ScrollToTop,
    page_height: f32,
    last_title: String,
}

impl LandingPage {
    pub fn new(config: PageConfig) -> Self {
        let faq = FaqPanel::new(config.faq.clone());
        let scroll = ScrollToTop::new(config.scroll_top_threshold);
        Self {
            class: ViewportClass::Wide,
            strip: None,
            countdown: None,
            faq,
            scroll,
            page_height: 0.0,
            last_title: String::new(),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[inline]
    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn faq_mut(&mut self) -> &mut FaqPanel {
        &mut self.faq
    }

    pub fn scroll_mut(&mut self) -> &mut ScrollToTop {
        &mut self.scroll
    }

    /// Snapshot of everything the renderer needs.
    pub fn view(&self) -> PageView {
        let lang = self.config.lang;
        PageView {
            class: self.class,
            marquee: self.strip.as_ref().map(SponsorStrip::view),
            countdown: self.countdown.as_ref().map(|c| c.view(lang)),
            faq: self.faq.view(lang),
            scroll_top: self
                .scroll
                .is_visible()
                .then(|| crate::i18n::t("scroll.top", lang).to_string()),
        }
    }

    fn start_strip(&mut self, host: &mut HostCtx<'_>) {
        let metrics = self.class.strip_metrics(&self.config);
        self.strip = SponsorStrip::start(
            &self.config.sponsors,
            self.config.speed,
            metrics,
            &mut *host.frames,
        );
    }

    fn stop_strip(&mut self) {
        if let Some(mut strip) = self.strip.take() {
            strip.stop();
        }
    }

    fn on_resize(&mut self, host: &mut HostCtx<'_>) {
        let viewport = host.viewport;
        if !viewport.is_valid() {
            // Minimized: keep the current layout until a real size arrives.
            return;
        }
        self.page_height = viewport.height;

        let class = ViewportClass::classify(viewport.width, self.config.compact_breakpoint);
        if class == self.class {
            return;
        }

        log::debug!("layout {:?} -> {:?} at {}px", self.class, class, viewport.width);
        self.class = class;
        self.stop_strip();
        self.start_strip(host);
    }

    fn on_key(&mut self, key: Key) {
        match key {
            Key::Home => self.scroll.scroll_to_top(),
            Key::Escape => self.faq.collapse(),
            Key::PageDown => self.scroll.scroll_by(self.page_height * 0.9),
            Key::PageUp => self.scroll.scroll_by(-self.page_height * 0.9),
            Key::ArrowDown => self.scroll.scroll_by(self.config.scroll_line_height),
            Key::ArrowUp => self.scroll.scroll_by(-self.config.scroll_line_height),
            // Entries are numbered from 1 on screen.
            Key::Digit(d @ 1..=9) => self.faq.toggle(d as usize - 1),
            _ => {}
        }
    }
}

impl App for LandingPage {
    fn on_mount(&mut self, host: &mut HostCtx<'_>) {
        self.class = ViewportClass::classify(host.viewport.width, self.config.compact_breakpoint);
        self.page_height = host.viewport.height;

        self.start_strip(host);
        self.countdown = Some(CountdownPanel::start(
            &mut *host.timers,
            host.clock.clone(),
            self.config.deadline_ms,
        ));

        log::info!(
            "landing page mounted: {:?} layout, {} sponsors, lang {}",
            self.class,
            self.config.sponsors.len(),
            self.config.lang.code(),
        );
    }

    fn on_event(&mut self, event: &HostEvent, host: &mut HostCtx<'_>) -> AppControl {
        match event {
            HostEvent::Resized(_) => self.on_resize(host),
            HostEvent::Scrolled(delta) => {
                self.scroll.scroll_by(delta.to_pixels(self.config.scroll_line_height));
            }
            HostEvent::KeyPressed(key) => self.on_key(*key),
            HostEvent::Focused(_) => {}
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        if let Some(strip) = self.strip.as_mut() {
            if strip.needs_measure() && strip.measure() {
                log::debug!("sponsor strip measured on frame {}", ctx.time.frame_index);
            }
        }

        let title = self.view().title_line();
        if title != self.last_title {
            ctx.runtime.set_title(title.clone());
            self.last_title = title;
        }

        AppControl::Continue
    }

    fn on_unmount(&mut self) {
        self.stop_strip();
        if let Some(mut countdown) = self.countdown.take() {
            countdown.stop();
        }
        log::info!("landing page unmounted");
    }
}

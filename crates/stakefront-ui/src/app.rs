use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use stakefront_engine::anim::MarqueeSpeed;
use stakefront_engine::window::{Runtime, RuntimeConfig};

use crate::config::{PageConfig, Sponsor};
use crate::i18n::Lang;
use crate::page::LandingPage;

/// Top-level application builder.
///
/// Configure the window and the page, then hand control to the event loop
/// with [`run`](Application::run).
///
/// ```rust,ignore
/// Application::new()
///     .title("Stake")
///     .lang(Lang::Zh)
///     .sponsor("aurora", "Aurora Ventures")
///     .deadline_ms(parse_deadline("2026-12-12T20:00:00+08:00")?)
///     .run()?;
/// ```
pub struct Application {
    title:  String,
    width:  f64,
    height: f64,
    page:   PageConfig,
    /// Set once `sponsor` is called so the first call replaces the defaults.
    custom_sponsors: bool,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:  "stakefront".to_string(),
            width:  1280.0,
            height: 720.0,
            page:   PageConfig::default(),
            custom_sponsors: false,
        }
    }

    /// Set the initial window title (replaced by the countdown once running).
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    pub fn lang(mut self, lang: Lang) -> Self {
        self.page.lang = lang;
        self
    }

    /// Add a sponsor. The first call discards the built-in list.
    pub fn sponsor(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        if !self.custom_sponsors {
            self.page.sponsors.clear();
            self.custom_sponsors = true;
        }
        self.page.sponsors.push(Sponsor::new(id, name));
        self
    }

    /// Countdown target in epoch milliseconds.
    pub fn deadline_ms(mut self, deadline_ms: i64) -> Self {
        self.page.deadline_ms = deadline_ms;
        self
    }

    pub fn speed(mut self, speed: MarqueeSpeed) -> Self {
        self.page.speed = speed;
        self
    }

    /// Replace the whole page configuration.
    pub fn page(mut self, page: PageConfig) -> Self {
        self.page = page;
        self.custom_sponsors = true;
        self
    }

    pub fn page_config(&self) -> &PageConfig {
        &self.page
    }

    /// Start the event loop. Returns when the window is closed.
    pub fn run(self) -> Result<()> {
        let config = RuntimeConfig {
            title:        self.title,
            initial_size: LogicalSize::new(self.width, self.height),
        };
        Runtime::run(config, LandingPage::new(self.page)).context("stakefront runtime error")
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sponsor_replaces_defaults() {
        let app = Application::new()
            .sponsor("x", "X")
            .sponsor("y", "Y");
        let ids: Vec<_> = app.page_config().sponsors.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["x", "y"]);
    }

    #[test]
    fn builder_sets_page_fields() {
        let app = Application::new()
            .lang(Lang::Zh)
            .deadline_ms(42)
            .speed(MarqueeSpeed::PixelsPerSecond(30.0));
        let page = app.page_config();
        assert_eq!(page.lang, Lang::Zh);
        assert_eq!(page.deadline_ms, 42);
        assert_eq!(page.speed, MarqueeSpeed::PixelsPerSecond(30.0));
        assert!(!page.sponsors.is_empty());
    }
}

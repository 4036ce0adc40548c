//! Stakefront UI: the staking landing page on top of `stakefront-engine`.
//!
//! The page is a [`LandingPage`] implementing the engine's `App` contract. It
//! owns the sponsor marquee and launch countdown lifecycles and exposes a
//! plain [`PageView`] snapshot for whatever renders it.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use stakefront_ui::prelude::*;
//!
//! Application::new()
//!     .title("Stake")
//!     .deadline_ms(parse_deadline("2026-12-12T20:00:00+08:00")?)
//!     .run()?;
//! ```

pub mod app;
pub mod config;
pub mod countdown;
pub mod faq;
pub mod i18n;
pub mod layout;
pub mod page;
pub mod scroll;
pub mod sponsors;
pub mod view;

pub use app::Application;
pub use page::LandingPage;
pub use view::PageView;

/// Everything an embedding binary needs.
pub mod prelude {
    pub use crate::app::Application;
    pub use crate::config::{
        parse_deadline, ConfigError, PageConfig, Sponsor, StripMetrics, DEFAULT_DEADLINE,
        DEFAULT_DEADLINE_MS,
    };
    pub use crate::i18n::{t, Lang};
    pub use crate::layout::ViewportClass;
    pub use crate::page::LandingPage;
    pub use crate::view::{CountdownView, FaqItemView, MarqueeView, PageView};

    pub use stakefront_engine::anim::MarqueeSpeed;
}

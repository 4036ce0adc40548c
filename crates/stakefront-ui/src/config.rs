use std::fmt;

use chrono::DateTime;

use stakefront_engine::anim::MarqueeSpeed;

use crate::i18n::Lang;

/// Launch deadline shown by the countdown, RFC 3339 with offset.
pub const DEFAULT_DEADLINE: &str = "2026-12-12T20:00:00+08:00";

/// [`DEFAULT_DEADLINE`] in epoch milliseconds.
pub const DEFAULT_DEADLINE_MS: i64 = 1_797_076_800_000;

// ── Sponsor ───────────────────────────────────────────────────────────────

/// One logo in the sponsor strip. Opaque to the marquee; the renderer keys
/// assets by `id` and shows `name` as alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sponsor {
    pub id: String,
    pub name: String,
}

impl Sponsor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// Banner geometry for one layout variant, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StripMetrics {
    pub banner_width: f32,
    pub gap: f32,
}

impl StripMetrics {
    pub const fn new(banner_width: f32, gap: f32) -> Self {
        Self { banner_width, gap }
    }
}

// ── PageConfig ────────────────────────────────────────────────────────────

/// Everything the landing page needs that is not derived at runtime.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub sponsors: Vec<Sponsor>,
    /// Countdown target, epoch milliseconds.
    pub deadline_ms: i64,
    pub lang: Lang,

    /// Viewports narrower than this use the compact layout.
    pub compact_breakpoint: f32,
    pub wide_strip: StripMetrics,
    pub compact_strip: StripMetrics,
    pub speed: MarqueeSpeed,

    /// The scroll-to-top button shows once the page is scrolled past this.
    pub scroll_top_threshold: f32,
    /// Pixels per wheel line.
    pub scroll_line_height: f32,

    /// FAQ entries as (question key, answer key) pairs for [`crate::i18n::t`].
    pub faq: Vec<(&'static str, &'static str)>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sponsors: default_sponsors(),
            deadline_ms: DEFAULT_DEADLINE_MS,
            lang: Lang::En,
            compact_breakpoint: 768.0,
            wide_strip: StripMetrics::new(200.0, 10.0),
            compact_strip: StripMetrics::new(120.0, 10.0),
            speed: MarqueeSpeed::SlotsPerSecond(1.0),
            scroll_top_threshold: 300.0,
            scroll_line_height: 40.0,
            faq: vec![
                ("faq.what.q", "faq.what.a"),
                ("faq.lock.q", "faq.lock.a"),
                ("faq.rewards.q", "faq.rewards.a"),
                ("faq.wallet.q", "faq.wallet.a"),
            ],
        }
    }
}

fn default_sponsors() -> Vec<Sponsor> {
    [
        ("aurora", "Aurora Ventures"),
        ("bastion", "Bastion Capital"),
        ("cobalt", "Cobalt Labs"),
        ("drift", "Driftwood DAO"),
        ("ember", "Ember Node"),
        ("fjord", "Fjord Custody"),
    ]
    .into_iter()
    .map(|(id, name)| Sponsor::new(id, name))
    .collect()
}

// ── deadline parsing ──────────────────────────────────────────────────────

/// A configuration value that could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidDeadline { input: String, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDeadline { input, reason } => {
                write!(f, "invalid deadline {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parses an RFC 3339 instant (offset required) into epoch milliseconds.
pub fn parse_deadline(input: &str) -> Result<i64, ConfigError> {
    DateTime::parse_from_rfc3339(input.trim())
        .map(|dt| dt.timestamp_millis())
        .map_err(|e| ConfigError::InvalidDeadline {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

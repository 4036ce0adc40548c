//! Plain snapshots of page state, ready for whatever draws them.

use crate::layout::ViewportClass;

/// The sponsor strip as it should appear this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeView {
    pub offset: f64,
    /// CSS-style transform, e.g. `translate3d(-12.500px, 0, 0)`.
    pub transform: String,
    /// Sponsor ids in rendered order (three copies of the source list).
    pub rendered_ids: Vec<String>,
    pub banner_width: f32,
    pub gap: f32,
}

/// One countdown unit: value string and its translated label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownUnit {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownView {
    /// "Staking opens in" before the deadline, "Staking is live" after.
    pub headline: String,
    pub finished: bool,
    /// Days, hours, minutes, seconds.
    pub units: [CountdownUnit; 4],
}

impl CountdownView {
    /// Compact one-line form: `12d 04:05:06`.
    pub fn clock(&self) -> String {
        let [d, h, m, s] = &self.units;
        format!("{}d {}:{}:{}", d.value, h.value, m.value, s.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItemView {
    pub question: String,
    /// Present only while the entry is expanded.
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub class: ViewportClass,
    /// `None` when there are no sponsors to scroll.
    pub marquee: Option<MarqueeView>,
    pub countdown: Option<CountdownView>,
    pub faq: Vec<FaqItemView>,
    /// `Some(label)` while the scroll-to-top button is visible.
    pub scroll_top: Option<String>,
}

impl PageView {
    /// One-line summary used as the window title.
    pub fn title_line(&self) -> String {
        match &self.countdown {
            Some(c) if c.finished => c.headline.clone(),
            Some(c) => format!("{} {}", c.headline, c.clock()),
            None => String::from("stakefront"),
        }
    }
}

use crate::config::{PageConfig, StripMetrics};

/// Which of the two page layouts applies to the current viewport.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    Compact,
    Wide,
}

impl ViewportClass {
    /// Compact strictly below the breakpoint.
    pub fn classify(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint { ViewportClass::Compact } else { ViewportClass::Wide }
    }

    #[inline]
    pub fn is_compact(self) -> bool {
        self == ViewportClass::Compact
    }

    /// Sponsor banner geometry for this layout.
    pub fn strip_metrics(self, config: &PageConfig) -> StripMetrics {
        match self {
            ViewportClass::Compact => config.compact_strip,
            ViewportClass::Wide => config.wide_strip,
        }
    }
}

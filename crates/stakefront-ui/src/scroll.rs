/// Page scroll position and the scroll-to-top button it drives.
#[derive(Debug, Clone)]
pub struct ScrollToTop {
    position: f32,
    threshold: f32,
}

impl ScrollToTop {
    pub fn new(threshold: f32) -> Self {
        Self { position: 0.0, threshold: threshold.max(0.0) }
    }

    /// Moves the page by `dy` logical pixels (positive is down). Never above the top.
    pub fn scroll_by(&mut self, dy: f32) {
        if !dy.is_finite() {
            return;
        }
        self.position = (self.position + dy).max(0.0);
    }

    pub fn scroll_to_top(&mut self) {
        self.position = 0.0;
    }

    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Visible strictly past the threshold.
    pub fn is_visible(&self) -> bool {
        self.position > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_only_past_threshold() {
        let mut s = ScrollToTop::new(300.0);
        s.scroll_by(300.0);
        assert!(!s.is_visible());
        s.scroll_by(0.5);
        assert!(s.is_visible());
        s.scroll_to_top();
        assert!(!s.is_visible());
        assert_eq!(s.position(), 0.0);
    }

    #[test]
    fn cannot_scroll_above_top() {
        let mut s = ScrollToTop::new(300.0);
        s.scroll_by(-500.0);
        assert_eq!(s.position(), 0.0);
        s.scroll_by(f32::NAN);
        assert_eq!(s.position(), 0.0);
    }
}

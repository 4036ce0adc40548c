use std::fmt;

use crate::coords::Viewport;

/// Keyboard key identifier.
///
/// Only the keys the page reacts to are named; everything else maps to
/// `Key::Unknown(u32)` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Home,
    End,
    PageUp,
    PageDown,
    ArrowUp,
    ArrowDown,

    /// Top-row or keypad digit, `0..=9`.
    Digit(u8),

    /// Platform-dependent key not yet represented here.
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Digit(d) => write!(f, "{d}"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Scroll input.
///
/// `Line` corresponds to "scroll lines" style input; `Pixel` is high precision.
/// Positive `y` scrolls content up (towards the top of the page).
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ScrollDelta {
    Line { y: f32 },
    Pixel { y: f32 },
}

impl ScrollDelta {
    /// Downward page movement in logical pixels for a given line height.
    pub fn to_pixels(self, line_height: f32) -> f32 {
        match self {
            ScrollDelta::Line { y } => -y * line_height,
            ScrollDelta::Pixel { y } => -y,
        }
    }
}

/// Platform-agnostic events delivered to the mounted app.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Window content area changed size (logical pixels).
    Resized(Viewport),

    Scrolled(ScrollDelta),

    KeyPressed(Key),

    /// Window focus change.
    Focused(bool),
}

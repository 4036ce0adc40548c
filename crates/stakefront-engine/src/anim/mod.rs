//! Continuous-time UI animators.
//!
//! Both engines are plain state machines; the `*Loop` / `*Timer` handles wire
//! them to a scheduler and own the cancellation handle for the caller.

pub mod countdown;
pub mod marquee;

pub use countdown::{CountdownEngine, CountdownParts, CountdownTimer};
pub use marquee::{MarqueeAnimator, MarqueeLoop, MarqueeSpeed};

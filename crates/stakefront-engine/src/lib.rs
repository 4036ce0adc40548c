//! Stakefront engine crate.
//!
//! Owns the time sources, schedulers and animators used by the landing page,
//! plus the winit host that drives them.

pub mod anim;
pub mod core;
pub mod coords;
pub mod input;
pub mod logging;
pub mod schedule;
pub mod time;
pub mod window;

//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window and turns them into a [`Host`]:
//! `RedrawRequested` is the paint opportunity, window events become
//! [`HostEvent`]s.
//!
//! [`Host`]: crate::core::Host
//! [`HostEvent`]: crate::input::HostEvent

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};

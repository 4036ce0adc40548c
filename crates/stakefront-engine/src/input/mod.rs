//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform events into `HostEvent`s.

mod types;

pub use types::{HostEvent, Key, ScrollDelta};

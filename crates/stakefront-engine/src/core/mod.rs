//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform loop)
//! and the page (presentation layer). The page only ever sees schedulers, a
//! clock and plain events; the [`Host`] bundles them so the same page can be
//! driven by the winit runtime or by a test.

mod app;
mod ctx;
mod host;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, HostCtx};
pub use host::Host;

//! Logging utilities.
//!
//! Everything in the workspace logs through the `log` facade; this module
//! only decides where those records go.

mod init;

pub use init::{init_logging, LoggingConfig};

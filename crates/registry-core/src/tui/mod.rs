//! Console front end using cliclack (Charm-style inline output)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod commands;

#[cfg(feature = "tui")]
pub use commands::{add, list, AddTarget, RunStatus};

//! wavtext CLI library.
//!
//! Command implementations and logging setup for the `wavtext` binary.

pub mod commands;
pub mod logging;

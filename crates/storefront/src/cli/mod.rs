//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storefront binary.

mod catalog;
mod commands;
mod logging;

pub use catalog::handle_command;
pub use commands::{Cli, Commands};
pub use logging::init_logging;

//! Furlong CLI library.
//!
//! Input reading, configuration loading, command execution and output
//! formatting for the `furlong` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pdf;

pub use cli::{Cli, Command};
pub use config::{load_extractor_config, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;

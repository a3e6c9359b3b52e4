//! Presentation layer for jokehub
//!
//! CLI argument definitions and console output formatting.

pub mod cli;
pub mod output;

pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::formatter::ConsoleFormatter;

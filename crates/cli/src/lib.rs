//! `loanbook` command-line tool: inspect and initialise loan book data files.

pub mod commands;
pub mod config;

pub use config::{CliConfig, OutputFormat};

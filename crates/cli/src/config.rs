//! Runtime configuration, resolved from flags and environment variables.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use loanbook_observability::LogFormat;

/// Default location of the loan book data file.
pub const DEFAULT_DATA_FILE: &str = "data/loanbook.xml";

/// Settings shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct CliConfig {
    /// Loan book XML data file
    #[arg(short, long, env = "LOANBOOK_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Log line format (text, json)
    #[arg(long, env = "LOANBOOK_LOG_FORMAT", default_value = "text")]
    pub log_format: LogFormat,

    /// Output format for listings
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_format: LogFormat::default(),
            output: OutputFormat::default(),
        }
    }
}

/// How listings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One record per line
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

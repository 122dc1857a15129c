//! `loanbook` binary entry point.

use clap::{Parser, Subcommand};

use loanbook_cli::{CliConfig, commands};

/// Loan book data file tool
#[derive(Parser)]
#[command(name = "loanbook")]
#[command(about = "Inspect and initialise LoanBook data files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    config: CliConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the data file and report whether it is valid
    Check,
    /// List bikes
    Bikes,
    /// List loans
    Loans,
    /// Write an empty data file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    loanbook_observability::tracing::init(cli.config.log_format);

    let result = match &cli.command {
        Commands::Check => commands::check(&cli.config),
        Commands::Bikes => commands::bikes(&cli.config),
        Commands::Loans => commands::loans(&cli.config),
        Commands::Init { force } => commands::init(&cli.config, *force),
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

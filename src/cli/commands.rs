// src/cli/commands.rs
use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a password
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Exclude numbers
        #[arg(long)]
        no_numbers: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,
    },

    /// Analyze password strength
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Import credentials from a pasted-text or CSV file
    Import {
        /// File to import
        #[arg(required = true)]
        file: PathBuf,

        /// Force the import format instead of auto-detecting
        #[arg(long, value_parser = ["text", "csv"])]
        format: Option<String>,
    },

    /// Audit a JSON export of stored credentials
    Audit {
        /// File holding a JSON array of credential records
        #[arg(required = true)]
        file: PathBuf,
    },
}

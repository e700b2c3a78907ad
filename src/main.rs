// src/main.rs
use std::path::Path;

use clap::Parser;

use credvault::cli::{handlers, Args, CliCommand};
use credvault::core::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::debug!("loaded config: {:?}", config);

    match args.command {
        CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
        } => handlers::handle_generate(
            &config,
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_symbols,
            args.json,
        ),
        CliCommand::Analyze { password } => handlers::handle_analyze(&password, args.json),
        CliCommand::Import { file, format } => {
            handlers::handle_import(&file, format.as_deref(), args.json)
        }
        CliCommand::Audit { file } => handlers::handle_audit(&file, args.json),
    }
}

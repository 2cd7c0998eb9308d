//! Command-line front end for the theme engine.
//!
//! `run` parses the command line, loads configuration, installs the logger
//! and hands the chosen subcommand to [`commands::dispatch`]. Every
//! subcommand writes its progress through an [`output::Output`] so the
//! handlers can be exercised against in-memory buffers.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod output;

use clap::Parser;
use cli::Cli;
use commands::CommandContext;
use error::CliError;
use output::Output;
use std::io;

/// Entry point shared by the binary.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenv::dotenv().ok();
    let home = dirs::home_dir().ok_or(CliError::NoHome)?;
    let app_config = config::load_config(&home).map_err(CliError::Config)?;

    if let Err(e) = logger::setup_logger(cli.verbose, app_config.logging()) {
        eprintln!("Warning: failed to initialize logger: {e}");
    }

    let ctx = CommandContext::new(home, app_config);
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    let mut output = Output::new(&mut stdout, &mut stderr);

    commands::dispatch(cli.command, &ctx, &mut output)
}

use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

mod cli;
mod commands;
mod dispatch;
mod output;

use cli::Cli;
use commands::config::load_config;
use commands::{CommandContext, CommandError};
use dispatch::{CliCommand, Dispatch};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if cli.json {
                let error_json = serde_json::json!({
                    "error": {
                        "code": error_code(&e),
                        "message": e.to_string(),
                    }
                });
                match serde_json::to_string_pretty(&error_json) {
                    Ok(text) => eprintln!("{text}"),
                    Err(_) => eprintln!("{error_json}"),
                }
            } else {
                eprintln!("Error: {e}");
            }
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run(cli: &Cli) -> commands::Result<()> {
    let config = load_config()?;
    let ctx = CommandContext::from_cli(cli, &config)?;
    let dispatch = Dispatch::from_cli(cli);

    tracing::debug!(
        command = dispatch.name(),
        corpus = %ctx.corpus_path.display(),
        "dispatching"
    );

    dispatch.execute(&ctx)
}

/// Installs the stderr log subscriber.
///
/// `--verbose` shows the per-stage search trace, `--quiet` keeps errors only.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .init();
}

/// Returns the error code string for JSON output.
fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Menu(_) => "MENU_ERROR",
        CommandError::CorpusStore(_) => "CORPUS_ERROR",
        CommandError::NoCorpus { .. } => "NO_CORPUS",
        CommandError::ReadInput { .. } => "READ_ERROR",
        CommandError::Config(_) => "CONFIG_ERROR",
        CommandError::Io(_) => "IO_ERROR",
        CommandError::Json(_) => "JSON_ERROR",
    }
}

/// Returns the process exit status for an error.
fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Menu(_) => 1,
        CommandError::Json(_) => 1,
        CommandError::ReadInput { .. } => 3,
        CommandError::Io(_) => 3,
        CommandError::Config(_) => 5,
        CommandError::CorpusStore(_) => 5,
        CommandError::NoCorpus { .. } => 5,
    }
}

//! # msgc CLI entry point
//!
//! Parses command-line arguments and dispatches to the validate handler.
//! Uses clap derive macros; the exit-code contract (0/1/2) matches the
//! Python validator scripts this binary replaces.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use msgc_cli::resolve_repo_root;
use msgc_cli::validate::{run_validate, ValidateArgs};
use msgc_core::EXIT_ENVIRONMENT_ERROR;

/// Contract validation toolchain for the messaging service.
///
/// Validates example event payloads against the shared envelope schema and
/// the gap inventory document against its schema.
#[derive(Parser, Debug)]
#[command(name = "msgc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Repository root containing the contracts/ directory. Defaults to
    /// searching upward from the current directory.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate contract documents against their schemas.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level. Diagnostics go to
    // stderr; stdout is reserved for the report itself.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let repo_root = match cli.root {
        Some(root) => root,
        None => {
            let cwd = match std::env::current_dir() {
                Ok(cwd) => cwd,
                Err(e) => {
                    eprintln!("cannot determine current directory: {e}");
                    return ExitCode::from(EXIT_ENVIRONMENT_ERROR);
                }
            };
            match resolve_repo_root(&cwd) {
                Some(root) => root,
                None => {
                    eprintln!(
                        "could not locate repository root (no contracts/ directory found); \
                         run from inside the repository or pass --root"
                    );
                    return ExitCode::from(EXIT_ENVIRONMENT_ERROR);
                }
            }
        }
    };

    tracing::debug!(repo_root = %repo_root.display(), "resolved repository root");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args, &repo_root),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::from(EXIT_ENVIRONMENT_ERROR)
        }
    }
}

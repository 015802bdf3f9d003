//! svcgen — service scaffolding generator CLI.
//!
//! # Usage
//!
//! ```text
//! svcgen init <name> [--file <definition.yaml>]
//! svcgen generate <definition|dir> [--out <dir>] [--templates <dir>] [--dry-run] [--json]
//! svcgen diff <definition> [--out <dir>] [--templates <dir>]
//! svcgen status <definition> [--out <dir>] [--json]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`); logs go to stderr.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{diff::DiffArgs, generate::GenerateArgs, init::InitArgs, status::StatusArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "svcgen",
    version,
    about = "Generate service scaffolding while keeping user-edited hook files",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a starter service definition.
    Init(InitArgs),

    /// Render and write every file of one or more services.
    Generate(GenerateArgs),

    /// Show unified diff of what generate would write for a service.
    Diff(DiffArgs),

    /// Show which generated files were edited since the last run.
    Status(StatusArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Commands::Init(args) => args.run(),
        Commands::Generate(args) => args.run(),
        Commands::Diff(args) => args.run(),
        Commands::Status(args) => args.run(),
    }
}

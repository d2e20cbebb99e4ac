//! sentsplit command-line entry point

use anyhow::Result;
use clap::Parser;
use sentsplit_cli::commands::{self, Commands};

/// Split text into one sentence per line
#[derive(Debug, Parser)]
#[command(name = "sentsplit", version, about = "Rule-based sentence boundary detection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split(args) => args.execute(),
        Commands::List { subcommand } => commands::list(subcommand),
    }
}

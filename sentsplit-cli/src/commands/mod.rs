//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use sentsplit_core::{available_languages, LanguageInfo};
use std::io::{self, Write};

pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split a text file into one sentence per line
    Split(split::SplitArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in prefix tables
    Languages,
}

/// Run a list subcommand against stdout
pub fn list(subcommand: ListCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match subcommand {
        ListCommands::Languages => write_languages(&mut out, &available_languages())?,
    }
    Ok(())
}

fn write_languages<W: Write>(out: &mut W, languages: &[LanguageInfo]) -> Result<()> {
    writeln!(out, "Available languages:")?;
    for info in languages {
        writeln!(out, "  {:<4}{}", info.code, info.name)?;
    }
    Ok(())
}

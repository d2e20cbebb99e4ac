//! sentsplit CLI library
//!
//! This library provides the command-line interface for the sentsplit
//! sentence boundary detector.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod language_source;
pub mod output;

pub use error::{CliError, CliResult};

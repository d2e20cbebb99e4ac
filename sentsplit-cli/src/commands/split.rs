//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::language_source::LanguageSource;
use crate::output::{write_output, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use sentsplit_core::Splitter;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Language code selecting the non-breaking prefix table
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Suppress log output, including the fallback warning
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Directory with `<code>.toml` or `nonbreaking_prefix.<code>` files
    #[arg(long, value_name = "DIR", env = "SENTSPLIT_PREFIX_DIR")]
    pub prefix_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Input text file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,
}

/// Effective settings after merging flags over the config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSettings {
    pub language: String,
    pub source: LanguageSource,
    pub format: OutputFormat,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let settings = self.resolve(config);
        log::info!(
            "Splitting {} as '{}' ({})",
            self.input.display(),
            settings.language,
            settings.source.display_name()
        );

        let splitter = Splitter::from_source(&settings.language, &settings.source.to_prefix_source())
            .map_err(|e| CliError::PrefixDataError(e.to_string()))?;
        let text = FileReader::read_text(&self.input)?;
        let classified = splitter.split_text(&text);

        // Nothing is written until the whole input has been classified
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                let mut formatter = settings.format.formatter(BufWriter::new(file));
                write_output(formatter.as_mut(), &classified)?;
            }
            None => {
                let mut formatter = settings.format.formatter(io::stdout().lock());
                write_output(formatter.as_mut(), &classified)?;
            }
        }

        log::info!("Wrote {} lines", classified.lines().count());
        Ok(())
    }

    /// Merge command-line flags over `config`
    pub fn resolve(&self, config: CliConfig) -> SplitSettings {
        let split = config.split;
        SplitSettings {
            language: self.language.clone().unwrap_or(split.language),
            source: LanguageSource::from_prefix_dir(self.prefix_dir.clone().or(split.prefix_dir)),
            format: self.format.unwrap_or(split.format),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running inside tests
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use news_eda::config::{EdaConfig, OutputFormat};

/// Exploratory analysis of a labeled news-article dataset
#[derive(Parser, Debug)]
#[command(name = "news-eda")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset CSV file (overrides `dataset.path` from the config)
    pub path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Number of authors and words listed per class
    #[arg(long)]
    pub top: Option<usize>,

    /// Lowercase words before counting
    #[arg(long)]
    pub lowercase: bool,

    /// Drop English stopwords before counting
    #[arg(long)]
    pub stopwords: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `config` subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print the effective configuration as TOML
    Show,
    /// Print one value by dotted key (e.g. `analysis.top_words`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Destination (defaults to the platform config directory)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// `--format` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut EdaConfig) {
        if let Some(path) = &self.path {
            config.dataset.path = path.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format.into();
        }
        if let Some(top) = self.top {
            config.analysis.top_authors = top;
            config.analysis.top_words = top;
        }
        if self.lowercase {
            config.tokenizer.lowercase = true;
        }
        if self.stopwords {
            config.tokenizer.stopwords_enabled = true;
        }
    }
}

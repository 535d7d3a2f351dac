#![forbid(unsafe_code)]

//! news-eda CLI
//!
//! Prints an exploratory analysis of a labeled news-article CSV file.

use std::io::BufWriter;

use anyhow::Result;
use clap::Parser;
use news_eda_cli::config_handlers::handle_config_command;
use news_eda_cli::run::{effective_config, run_analysis};
use news_eda_cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    let default_filter = if cli.verbose {
        "warn,news_eda=debug,news_eda_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Some(Command::Config { ref action }) => {
            handle_config_command(cli.config.as_deref(), action.clone(), &mut out)
                .map_err(anyhow::Error::from)
        }
        None => effective_config(&cli).and_then(|config| {
            tracing::debug!(path = %config.dataset.path.display(), "Running analysis");
            run_analysis(&config, &mut out)
        }),
    }
}

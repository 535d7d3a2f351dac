//! Analysis command.

use std::io::Write;

use anyhow::{Context, Result};
use news_eda::config::{EdaConfig, OutputFormat};
use news_eda::{Dataset, Report};

use crate::cli::Cli;

/// Resolve the effective configuration: file (or defaults) plus CLI overrides.
pub fn effective_config(cli: &Cli) -> Result<EdaConfig> {
    let mut config = EdaConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Load the dataset, build the report and write it to `out`.
pub fn run_analysis<W: Write>(config: &EdaConfig, mut out: W) -> Result<()> {
    let dataset = Dataset::from_path(&config.dataset.path, &config.dataset).with_context(|| {
        format!(
            "Failed to load dataset from {}",
            config.dataset.path.display()
        )
    })?;

    let report = Report::build(&dataset, config)?;

    match config.output.format {
        OutputFormat::Text => report.write_text(&mut out)?,
        OutputFormat::Json => report.write_json(&mut out)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::Parser;

    const CSV: &str = "id,author,text,label\n0,Ann,the vote,1\n1,Bob,the emails,0\n";

    #[test]
    fn test_run_analysis_text() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("news.csv");
        std::fs::write(&path, CSV).unwrap();

        let cli = Cli::try_parse_from(["news-eda", path.to_str().unwrap()]).unwrap();
        let mut config = EdaConfig::default();
        cli.apply_overrides(&mut config);

        let mut buf = Vec::new();
        run_analysis(&config, &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Real articles: 1"));
        assert!(output.contains("Fake articles: 1"));
    }

    #[test]
    fn test_run_analysis_missing_dataset() {
        let mut config = EdaConfig::default();
        config.dataset.path = "/nonexistent/news.csv".into();

        let err = run_analysis(&config, Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to load dataset"));
    }

    #[test]
    fn test_effective_config_with_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\ntop_words = 9\n").unwrap();

        let cli =
            Cli::try_parse_from(["news-eda", "--config", path.to_str().unwrap(), "--lowercase"])
                .unwrap();
        let config = effective_config(&cli).unwrap();
        assert_eq!(config.analysis.top_words, 9);
        assert!(config.tokenizer.lowercase);
    }

    #[test]
    fn test_effective_config_missing_explicit_file() {
        let cli = Cli::try_parse_from(["news-eda", "--config", "/nonexistent/c.toml"]).unwrap();
        assert!(effective_config(&cli).is_err());
    }
}

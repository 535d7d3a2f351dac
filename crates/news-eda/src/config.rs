//! Analysis configuration.
//!
//! Every field has a serde default, so an empty TOML document (or no file
//! at all) yields the stock behavior: read `data/raw/news_dataset.csv`,
//! treat label `1` as real and `0` as fake, print a text report.
//!
//! # Example
//!
//! ```rust
//! use news_eda::config::EdaConfig;
//!
//! let config = EdaConfig::from_toml_str("[analysis]\ntop_words = 10\n").unwrap();
//! assert_eq!(config.analysis.top_words, 10);
//! assert_eq!(config.analysis.vocabulary_window, 500);
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Project name, used for the config directory.
pub const PROJECT_NAME: &str = "news-eda";

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "NEWS_EDA_CONFIG";

/// Narrowest allowed `analysis.max_cell_width`; clipped cells end in `...`.
pub const MIN_CELL_WIDTH: usize = 3;

// ============================================================================
// Sections
// ============================================================================

/// Where and how to read the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the CSV file.
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,

    /// Field delimiter.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

/// Numeric label values for each class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Label value of real articles.
    #[serde(default = "default_real_label")]
    pub real: i64,

    /// Label value of fake articles.
    #[serde(default)]
    pub fake: i64,
}

/// Table sizes for each section of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Rows shown by the head and tail previews.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Authors listed per class.
    #[serde(default = "default_top")]
    pub top_authors: usize,

    /// Words listed per class.
    #[serde(default = "default_top")]
    pub top_words: usize,

    /// Top-ranked words per class compared for exclusive vocabulary.
    #[serde(default = "default_vocabulary_window")]
    pub vocabulary_window: usize,

    /// Exclusive words listed.
    #[serde(default = "default_exclusive_limit")]
    pub exclusive_limit: usize,

    /// Cells wider than this are truncated in text output.
    #[serde(default = "default_max_cell_width")]
    pub max_cell_width: usize,
}

/// Word splitting options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Lowercase tokens before counting.
    #[serde(default)]
    pub lowercase: bool,

    /// Drop English stopwords.
    #[serde(default)]
    pub stopwords_enabled: bool,

    /// Extra stopwords to drop.
    #[serde(default)]
    pub custom_stopwords: Vec<String>,

    /// Words kept even when they are stopwords (case-sensitive).
    #[serde(default)]
    pub allowlist: Vec<String>,
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Output options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("data/raw/news_dataset.csv")
}

fn default_delimiter() -> char {
    ','
}

fn default_real_label() -> i64 {
    1
}

fn default_preview_rows() -> usize {
    5
}

fn default_top() -> usize {
    20
}

fn default_vocabulary_window() -> usize {
    500
}

fn default_exclusive_limit() -> usize {
    50
}

fn default_max_cell_width() -> usize {
    50
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            delimiter: default_delimiter(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            real: default_real_label(),
            fake: 0,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            preview_rows: default_preview_rows(),
            top_authors: default_top(),
            top_words: default_top(),
            vocabulary_window: default_vocabulary_window(),
            exclusive_limit: default_exclusive_limit(),
            max_cell_width: default_max_cell_width(),
        }
    }
}

impl DatasetConfig {
    /// Delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(Error::config(format!(
                "dataset.delimiter must be an ASCII character, got '{}'",
                self.delimiter
            )))
        }
    }
}

// ============================================================================
// EdaConfig
// ============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdaConfig {
    /// Dataset location and format.
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Class label values.
    #[serde(default)]
    pub labels: LabelConfig,

    /// Report table sizes.
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Word splitting.
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    /// Output format.
    #[serde(default)]
    pub output: OutputConfig,
}

impl EdaConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.dataset.delimiter_byte()?;
        if self.labels.real == self.labels.fake {
            return Err(Error::config(format!(
                "labels.real and labels.fake must differ (both are {})",
                self.labels.real
            )));
        }
        if self.analysis.vocabulary_window == 0 {
            return Err(Error::config("analysis.vocabulary_window must be positive"));
        }
        if self.analysis.max_cell_width < MIN_CELL_WIDTH {
            return Err(Error::config(format!(
                "analysis.max_cell_width must be at least {MIN_CELL_WIDTH}, got {}",
                self.analysis.max_cell_width
            )));
        }
        Ok(())
    }

    /// Platform default config file location.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolve the config file path.
    ///
    /// Checks in order:
    /// 1. The explicit path (e.g. `--config`)
    /// 2. The `NEWS_EDA_CONFIG` environment variable
    /// 3. The platform default location
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        locate(explicit, std::env::var(CONFIG_ENV_VAR).ok()).map(|(path, _)| path)
    }

    /// Load the configuration, falling back to defaults when no file exists
    /// at the platform default location.
    ///
    /// A path given explicitly or through the environment must exist.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        load_from(explicit, std::env::var(CONFIG_ENV_VAR).ok())
    }
}

/// Returns the candidate path and whether it was requested explicitly.
fn locate(explicit: Option<&str>, env_value: Option<String>) -> Option<(PathBuf, bool)> {
    if let Some(path) = explicit {
        return Some((PathBuf::from(path), true));
    }
    if let Some(path) = env_value.filter(|p| !p.is_empty()) {
        return Some((PathBuf::from(path), true));
    }
    EdaConfig::default_config_path().map(|path| (path, false))
}

fn load_from(explicit: Option<&str>, env_value: Option<String>) -> Result<EdaConfig> {
    match locate(explicit, env_value) {
        Some((path, _)) if path.exists() => {
            tracing::debug!(path = %path.display(), "Loading config file");
            EdaConfig::from_file(&path)
        }
        Some((path, true)) => Err(Error::config(format!(
            "Config file not found: {}",
            path.display()
        ))),
        _ => {
            tracing::debug!("No config file found, using defaults");
            Ok(EdaConfig::default())
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EdaConfig::default();
        assert_eq!(
            config.dataset.path,
            PathBuf::from("data/raw/news_dataset.csv")
        );
        assert_eq!(config.dataset.delimiter, ',');
        assert_eq!(config.labels.real, 1);
        assert_eq!(config.labels.fake, 0);
        assert_eq!(config.analysis.preview_rows, 5);
        assert_eq!(config.analysis.top_authors, 20);
        assert_eq!(config.analysis.top_words, 20);
        assert_eq!(config.analysis.vocabulary_window, 500);
        assert_eq!(config.analysis.exclusive_limit, 50);
        assert!(!config.tokenizer.lowercase);
        assert!(!config.tokenizer.stopwords_enabled);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = EdaConfig::from_toml_str("").unwrap();
        assert_eq!(config, EdaConfig::default());
    }

    #[test]
    fn test_partial_section() {
        let toml = r#"
[labels]
real = 0
fake = 1

[output]
format = "json"
"#;
        let config = EdaConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.labels.real, 0);
        assert_eq!(config.labels.fake, 1);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.analysis.top_words, 20);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = EdaConfig::default();
        config.tokenizer.custom_stopwords = vec!["said".to_string()];
        let toml = config.to_toml_string().unwrap();
        assert!(toml.contains("[analysis]"));
        assert_eq!(EdaConfig::from_toml_str(&toml).unwrap(), config);
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    #[test]
    fn test_same_labels_rejected() {
        let err = EdaConfig::from_toml_str("[labels]\nreal = 1\nfake = 1\n").unwrap_err();
        assert!(err.to_string().contains("must differ"));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let err = EdaConfig::from_toml_str("[dataset]\ndelimiter = \"§\"\n").unwrap_err();
        assert!(err.to_string().contains("ASCII"));
    }

    #[test]
    fn test_zero_window_rejected() {
        let err =
            EdaConfig::from_toml_str("[analysis]\nvocabulary_window = 0\n").unwrap_err();
        assert!(err.to_string().contains("vocabulary_window"));
    }

    #[test]
    fn test_narrow_cell_width_rejected() {
        let err = EdaConfig::from_toml_str("[analysis]\nmax_cell_width = 2\n").unwrap_err();
        assert!(err.to_string().contains("max_cell_width"));
        assert!(EdaConfig::from_toml_str("[analysis]\nmax_cell_width = 3\n").is_ok());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(EdaConfig::from_toml_str("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_tab_delimiter_byte() {
        let config = EdaConfig::from_toml_str("[dataset]\ndelimiter = \"\\t\"\n").unwrap();
        assert_eq!(config.dataset.delimiter_byte().unwrap(), b'\t');
    }

    // ------------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------------

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\npreview_rows = 3\n").unwrap();

        let config = load_from(Some(path.to_str().unwrap()), None).unwrap();
        assert_eq!(config.analysis.preview_rows, 3);
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = load_from(Some("/nonexistent/news-eda.toml"), None).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_env_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("env.toml");
        std::fs::write(&path, "[tokenizer]\nlowercase = true\n").unwrap();

        let config = load_from(None, Some(path.to_string_lossy().into_owned())).unwrap();
        assert!(config.tokenizer.lowercase);
    }

    #[test]
    fn test_explicit_wins_over_env() {
        let (path, explicit) = locate(Some("a.toml"), Some("b.toml".to_string())).unwrap();
        assert_eq!(path, PathBuf::from("a.toml"));
        assert!(explicit);
    }

    #[test]
    fn test_empty_env_value_ignored() {
        if let Some((_, explicit)) = locate(None, Some(String::new())) {
            assert!(!explicit);
        }
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[analysis\n").unwrap();

        let err = EdaConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }
}

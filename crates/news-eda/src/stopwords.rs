//! Stopword filtering for word tallies.
//!
//! Uses the `stop-words` crate for a comprehensive English stopword list
//! (~500 words) and supports:
//!
//! - Allowlist: words kept even if they're stopwords (case-sensitive)
//! - Custom stopwords: additional words to drop (e.g. "said", "reuters")
//!
//! # Example
//!
//! ```rust
//! use news_eda::config::TokenizerConfig;
//! use news_eda::stopwords::StopwordFilter;
//!
//! let config = TokenizerConfig {
//!     stopwords_enabled: true,
//!     custom_stopwords: vec!["said".to_string()],
//!     allowlist: vec!["US".to_string()],
//!     ..Default::default()
//! };
//! let filter = StopwordFilter::new(&config);
//!
//! assert!(filter.is_stopword("The"));
//! assert!(filter.is_stopword("said"));
//! assert!(!filter.is_stopword("US"));
//! assert!(!filter.is_stopword("election"));
//! ```

use std::collections::HashSet;
use stop_words::{get, LANGUAGE};

use crate::config::TokenizerConfig;

/// Stopword filter for token streams.
pub struct StopwordFilter {
    stopwords: HashSet<String>,
    allowlist: HashSet<String>,
    enabled: bool,
}

impl StopwordFilter {
    /// Create a filter from tokenizer configuration.
    pub fn new(config: &TokenizerConfig) -> Self {
        if !config.stopwords_enabled {
            return Self::disabled();
        }

        let mut stopwords: HashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        for word in &config.custom_stopwords {
            stopwords.insert(word.to_lowercase());
        }

        Self {
            stopwords,
            allowlist: config.allowlist.iter().cloned().collect(),
            enabled: true,
        }
    }

    /// Create a disabled filter (passes all words through).
    pub fn disabled() -> Self {
        Self {
            stopwords: HashSet::new(),
            allowlist: HashSet::new(),
            enabled: false,
        }
    }

    /// Check if a word should be dropped.
    ///
    /// Always `false` when disabled or when the word is allowlisted.
    /// Otherwise the stopword check is case-insensitive.
    pub fn is_stopword(&self, word: &str) -> bool {
        if !self.enabled || self.allowlist.contains(word) {
            return false;
        }
        self.stopwords.contains(&word.to_lowercase())
    }

    /// Number of stopwords in the filter.
    pub(crate) fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if filtering is enabled.
    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl std::fmt::Debug for StopwordFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopwordFilter")
            .field("enabled", &self.enabled)
            .field("stopword_count", &self.stopwords.len())
            .field("allowlist_count", &self.allowlist.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Word frequency tallies.
//!
//! Text is split on the single space character, exactly. Consecutive spaces
//! therefore produce empty-string tokens and punctuation or newlines stay
//! attached to their words; this keeps the tallies comparable with the raw
//! corpus rather than with a normalised one. Lowercasing and stopword
//! removal are opt-in through [`TokenizerConfig`].
//!
//! # Example
//!
//! ```rust
//! use news_eda::config::TokenizerConfig;
//! use news_eda::words::{word_counts, Tokenizer};
//!
//! let tokenizer = Tokenizer::new(&TokenizerConfig::default());
//! let counts = word_counts(&tokenizer, [Some("the cat the dog"), None]);
//!
//! assert_eq!(counts[0].word, "the");
//! assert_eq!(counts[0].count, 2);
//! assert_eq!(counts.len(), 3);
//! ```

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::config::TokenizerConfig;
use crate::stopwords::StopwordFilter;

/// Occurrences of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// The token.
    pub word: String,
    /// Number of occurrences.
    pub count: usize,
}

impl WordCount {
    /// Create a word count.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Splits article text into countable tokens.
#[derive(Debug)]
pub struct Tokenizer {
    lowercase: bool,
    stopwords: StopwordFilter,
}

impl Tokenizer {
    /// Create a tokenizer from configuration.
    pub fn new(config: &TokenizerConfig) -> Self {
        let stopwords = StopwordFilter::new(config);
        if stopwords.is_enabled() {
            tracing::debug!(count = stopwords.stopword_count(), "Stopword filtering enabled");
        }
        Self {
            lowercase: config.lowercase,
            stopwords,
        }
    }

    /// Iterate over the tokens of `text`.
    ///
    /// The allowlist is matched against the token as written, before
    /// lowercasing.
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Cow<'a, str>> + 'a {
        text.split(' ')
            .filter(move |token| !self.stopwords.is_stopword(token))
            .map(move |token| {
                if self.lowercase {
                    Cow::Owned(token.to_lowercase())
                } else {
                    Cow::Borrowed(token)
                }
            })
    }
}

/// Count every token of every present text.
///
/// Missing texts are skipped. The result is ordered by count descending,
/// ties by word ascending.
pub fn word_counts<'a>(
    tokenizer: &Tokenizer,
    texts: impl IntoIterator<Item = Option<&'a str>>,
) -> Vec<WordCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for text in texts {
        let Some(text) = text else {
            skipped += 1;
            continue;
        };
        for token in tokenizer.tokens(text) {
            match counts.get_mut(token.as_ref()) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(token.into_owned(), 1);
                }
            }
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "Skipped missing texts while counting words");
    }

    let mut ranked: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    ranked
}

/// Frequent fake-article words that are not frequent in real articles.
///
/// Compares the first `window` entries of both rankings and returns the
/// fake entries whose word is absent from the real window, in fake order.
pub fn exclusive_words(fake: &[WordCount], real: &[WordCount], window: usize) -> Vec<WordCount> {
    let real_window: HashSet<&str> = real
        .iter()
        .take(window)
        .map(|wc| wc.word.as_str())
        .collect();

    fake.iter()
        .take(window)
        .filter(|wc| !real_window.contains(wc.word.as_str()))
        .cloned()
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

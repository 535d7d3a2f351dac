//! Article records and label classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LabelConfig;

/// Class of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Label equal to the configured real value.
    Real,
    /// Label equal to the configured fake value.
    Fake,
    /// Missing, non-numeric, or any other value.
    Other,
}

impl Label {
    /// Classify a raw label cell.
    ///
    /// The cell is parsed as a number, so `1`, `1.0` and ` 1 ` all match a
    /// configured value of `1`.
    pub fn classify(raw: Option<&str>, labels: &LabelConfig) -> Self {
        let Some(value) = raw.and_then(|s| s.trim().parse::<f64>().ok()) else {
            return Label::Other;
        };
        if value == labels.real as f64 {
            Label::Real
        } else if value == labels.fake as f64 {
            Label::Fake
        } else {
            Label::Other
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Fake => write!(f, "fake"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// The analysed fields of one dataset row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Class of the article.
    pub label: Label,
    /// Author name, if present.
    pub author: Option<String>,
    /// Article body, if present.
    pub text: Option<String>,
}

impl Article {
    /// Create an article from already-classified fields.
    pub fn new(label: Label, author: Option<&str>, text: Option<&str>) -> Self {
        Self {
            label,
            author: author.map(str::to_string),
            text: text.map(str::to_string),
        }
    }

    pub(crate) fn from_cells(
        label: &Option<String>,
        author: &Option<String>,
        text: &Option<String>,
        labels: &LabelConfig,
    ) -> Self {
        Self {
            label: Label::classify(label.as_deref(), labels),
            author: author.clone(),
            text: text.clone(),
        }
    }
}

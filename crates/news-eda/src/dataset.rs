//! CSV dataset loading.
//!
//! A [`Dataset`] keeps every column of the file as optional strings. Empty
//! fields and the usual null markers (`NA`, `NaN`, `null`, ...) become
//! `None`, so the analysis modules can treat missing values uniformly.
//!
//! # Example
//!
//! ```rust
//! use news_eda::config::DatasetConfig;
//! use news_eda::dataset::Dataset;
//!
//! let csv = "id,author,text,label\n0,Ann,hello world,1\n1,,NA,0\n";
//! let dataset = Dataset::from_reader(csv.as_bytes(), &DatasetConfig::default()).unwrap();
//!
//! assert_eq!(dataset.len(), 2);
//! assert_eq!(dataset.columns(), ["id", "author", "text", "label"]);
//! assert_eq!(dataset.column("author").unwrap().collect::<Vec<_>>(), vec![Some("Ann"), None]);
//! ```

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::article::Article;
use crate::config::{DatasetConfig, LabelConfig};
use crate::error::{Error, Result};

/// Cell values read as missing.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Column holding the class label.
pub const LABEL_COLUMN: &str = "label";
/// Column holding the author name.
pub const AUTHOR_COLUMN: &str = "author";
/// Column holding the article body.
pub const TEXT_COLUMN: &str = "text";

/// Returns `true` if a raw cell value counts as missing.
pub fn is_missing(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw)
}

/// One row of a dataset together with its zero-based position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Position of the row in the file, excluding the header.
    pub index: usize,
    /// Cell values in column order.
    pub cells: Vec<Option<String>>,
}

/// An in-memory table read from a CSV file with a header row.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    /// Open and parse a CSV file.
    pub fn from_path(path: impl AsRef<Path>, config: &DatasetConfig) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io_with_path(e, path))?;
        let dataset = Self::from_reader(file, config)?;
        tracing::info!(
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.columns.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV from any reader.
    pub fn from_reader<R: Read>(reader: R, config: &DatasetConfig) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(config.delimiter_byte()?)
            .has_headers(true)
            .flexible(false)
            .from_reader(reader);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cells = record
                .iter()
                .map(|raw| (!is_missing(raw)).then(|| raw.to_string()))
                .collect();
            rows.push(cells);
        }

        Ok(Self { columns, rows })
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows, excluding the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the file had no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate over one column's values.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = Option<&str>> + '_> {
        let idx = self.column_index(name)?;
        Some(self.column_at(idx))
    }

    /// Iterate over the values of the column at `idx`.
    pub fn column_at(&self, idx: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(idx).and_then(|cell| cell.as_deref()))
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Vec<Row> {
        self.slice(0, n.min(self.rows.len()))
    }

    /// The last `n` rows.
    pub fn tail(&self, n: usize) -> Vec<Row> {
        let start = self.rows.len().saturating_sub(n);
        self.slice(start, self.rows.len())
    }

    fn slice(&self, start: usize, end: usize) -> Vec<Row> {
        self.rows[start..end]
            .iter()
            .enumerate()
            .map(|(offset, cells)| Row {
                index: start + offset,
                cells: cells.clone(),
            })
            .collect()
    }

    /// Extract the analysed fields of every row.
    ///
    /// Fails with [`Error::MissingColumn`] if `label`, `author` or `text`
    /// is absent from the header.
    pub fn articles(&self, labels: &LabelConfig) -> Result<Vec<Article>> {
        let require = |name: &str| {
            self.column_index(name)
                .ok_or_else(|| Error::missing_column(name))
        };
        let label_idx = require(LABEL_COLUMN)?;
        let author_idx = require(AUTHOR_COLUMN)?;
        let text_idx = require(TEXT_COLUMN)?;

        let articles = self
            .rows
            .iter()
            .map(|row| Article::from_cells(&row[label_idx], &row[author_idx], &row[text_idx], labels))
            .collect();
        Ok(articles)
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Column profiling: dtype inference and summary statistics.
//!
//! [`info`] reports each column's non-missing count and inferred dtype.
//! [`describe`] summarises numeric columns (count, mean, standard deviation,
//! min, quartiles, max) or, when the dataset has no numeric column, every
//! column's cardinality and most frequent value.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::dataset::Dataset;

// ============================================================================
// Types
// ============================================================================

/// Inferred column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DType {
    /// Every value is an integer and none is missing.
    Int64,
    /// Every present value is a number (or the column is entirely missing).
    Float64,
    /// Anything else.
    Object,
}

impl DType {
    /// Returns `true` for `Int64` and `Float64`.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int64 | Self::Float64)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int64 => write!(f, "int64"),
            Self::Float64 => write!(f, "float64"),
            Self::Object => write!(f, "object"),
        }
    }
}

/// Profile of a single column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    /// Column name.
    pub name: String,
    /// Number of non-missing values.
    pub non_null: usize,
    /// Inferred type.
    pub dtype: DType,
}

/// Shape and per-column profile of a dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetInfo {
    /// Number of rows.
    pub rows: usize,
    /// Per-column profile, in file order.
    pub columns: Vec<ColumnInfo>,
}

/// Statistics of a numeric column.
///
/// All statistics are `None` for a column without present values; `std`
/// is also `None` with fewer than two values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    /// Column name.
    pub name: String,
    /// Number of present values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation.
    pub std: Option<f64>,
    /// Smallest value.
    pub min: Option<f64>,
    /// First quartile.
    pub q25: Option<f64>,
    /// Median.
    pub q50: Option<f64>,
    /// Third quartile.
    pub q75: Option<f64>,
    /// Largest value.
    pub max: Option<f64>,
}

/// Cardinality of a non-numeric column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary {
    /// Column name.
    pub name: String,
    /// Number of present values.
    pub count: usize,
    /// Number of distinct present values.
    pub unique: usize,
    /// Most frequent value.
    pub top: Option<String>,
    /// Occurrences of `top`.
    pub freq: usize,
}

/// Output of [`describe`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "columns", rename_all = "snake_case")]
pub enum Description {
    /// One summary per numeric column.
    Numeric(Vec<NumericSummary>),
    /// One summary per column, used when no column is numeric.
    Categorical(Vec<CategoricalSummary>),
}

// ============================================================================
// Operations
// ============================================================================

/// Infer the dtype of a column from its values.
pub fn infer_dtype<'a>(values: impl IntoIterator<Item = Option<&'a str>>) -> DType {
    let mut present = 0usize;
    let mut missing = false;
    let mut all_int = true;

    for value in values {
        let Some(raw) = value else {
            missing = true;
            continue;
        };
        present += 1;
        let raw = raw.trim();
        if all_int && raw.parse::<i64>().is_ok() {
            continue;
        }
        all_int = false;
        if raw.parse::<f64>().is_err() {
            return DType::Object;
        }
    }

    if present > 0 && all_int && !missing {
        DType::Int64
    } else {
        DType::Float64
    }
}

/// Profile every column of a dataset.
pub fn info(dataset: &Dataset) -> DatasetInfo {
    let columns = dataset
        .columns()
        .iter()
        .enumerate()
        .map(|(idx, name)| ColumnInfo {
            name: name.clone(),
            non_null: dataset.column_at(idx).flatten().count(),
            dtype: infer_dtype(dataset.column_at(idx)),
        })
        .collect();

    DatasetInfo {
        rows: dataset.len(),
        columns,
    }
}

/// Summarise the dataset's columns.
pub fn describe(dataset: &Dataset) -> Description {
    let numeric: Vec<usize> = (0..dataset.columns().len())
        .filter(|&idx| infer_dtype(dataset.column_at(idx)).is_numeric())
        .collect();

    if numeric.is_empty() {
        let summaries = dataset
            .columns()
            .iter()
            .enumerate()
            .map(|(idx, name)| summarize_categorical(name, dataset.column_at(idx)))
            .collect();
        return Description::Categorical(summaries);
    }

    let summaries = numeric
        .into_iter()
        .map(|idx| {
            let values: Vec<f64> = dataset
                .column_at(idx)
                .flatten()
                .filter_map(|raw| raw.trim().parse::<f64>().ok())
                .collect();
            summarize_numeric(&dataset.columns()[idx], values)
        })
        .collect();
    Description::Numeric(summaries)
}

/// Compute the numeric statistics of a set of values.
pub fn summarize_numeric(name: &str, mut values: Vec<f64>) -> NumericSummary {
    let count = values.len();
    values.sort_by(f64::total_cmp);

    let mean = (count > 0).then(|| values.iter().sum::<f64>() / count as f64);
    let std = mean.filter(|_| count > 1).map(|mean| {
        let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (sum_sq / (count - 1) as f64).sqrt()
    });

    NumericSummary {
        name: name.to_string(),
        count,
        mean,
        std,
        min: values.first().copied(),
        q25: quantile(&values, 0.25),
        q50: quantile(&values, 0.5),
        q75: quantile(&values, 0.75),
        max: values.last().copied(),
    }
}

/// Linearly interpolated quantile of sorted values.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

fn summarize_categorical<'a>(
    name: &str,
    values: impl Iterator<Item = Option<&'a str>>,
) -> CategoricalSummary {
    // value -> (first position, frequency)
    let mut freqs: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut count = 0usize;
    for value in values.flatten() {
        let entry = freqs.entry(value).or_insert((count, 0));
        entry.1 += 1;
        count += 1;
    }

    let top = freqs
        .iter()
        .max_by(|a, b| a.1.1.cmp(&b.1.1).then(b.1.0.cmp(&a.1.0)))
        .map(|(value, (_, freq))| (value.to_string(), *freq));

    CategoricalSummary {
        name: name.to_string(),
        count,
        unique: freqs.len(),
        freq: top.as_ref().map_or(0, |(_, freq)| *freq),
        top: top.map(|(value, _)| value),
    }
}

// ============================================================================
// Tests
// ============================================================================

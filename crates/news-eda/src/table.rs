//! Plain-text table rendering for the report.
//!
//! Tables have an unlabelled index column on the left and right-aligned
//! cells, one header line and one line per row:
//!
//! ```text
//!    author  article_count
//! 0     Bob              2
//! 1     Ann              1
//! ```

use std::fmt;

/// Marker printed for missing cells.
pub const MISSING: &str = "NaN";

const ELLIPSIS: &str = "...";

/// A table ready for rendering.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<(String, Vec<String>)>,
    max_width: Option<usize>,
}

impl TextTable {
    /// Create an empty table with the given column headers.
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
            max_width: None,
        }
    }

    /// Truncate cells wider than `width` characters.
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Append a row with its index label.
    pub fn push_row(&mut self, index: impl ToString, cells: Vec<String>) {
        self.rows.push((index.to_string(), cells));
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn clip(&self, cell: &str) -> String {
        // Keep each cell on one line.
        let cell = cell.replace(['\n', '\r'], "\\n");
        match self.max_width {
            Some(max) if cell.chars().count() > max => {
                if max < ELLIPSIS.len() {
                    return cell.chars().take(max).collect();
                }
                let keep = max - ELLIPSIS.len();
                let mut clipped: String = cell.chars().take(keep).collect();
                clipped.push_str(ELLIPSIS);
                clipped
            }
            _ => cell,
        }
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "Empty table")?;
            writeln!(f, "Columns: [{}]", self.headers.join(", "))?;
            return writeln!(f, "Index: []");
        }

        let headers: Vec<String> = self.headers.iter().map(|h| self.clip(h)).collect();
        let rows: Vec<(String, Vec<String>)> = self
            .rows
            .iter()
            .map(|(index, cells)| (index.clone(), cells.iter().map(|c| self.clip(c)).collect()))
            .collect();

        let index_width = rows
            .iter()
            .map(|(index, _)| index.chars().count())
            .max()
            .unwrap_or(0);

        let widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                rows.iter()
                    .filter_map(|(_, cells)| cells.get(col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:index_width$}", "")?;
        for (header, &width) in headers.iter().zip(&widths) {
            write!(f, "  {header:>width$}")?;
        }
        writeln!(f)?;

        for (index, cells) in &rows {
            write!(f, "{index:<index_width$}")?;
            for (col, &width) in widths.iter().enumerate() {
                let cell = cells.get(col).map_or(MISSING, String::as_str);
                write!(f, "  {cell:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

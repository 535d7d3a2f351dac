//! The complete analysis report.
//!
//! [`Report::build`] runs every analysis step over a loaded [`Dataset`];
//! the result can be written as plain-text tables or as JSON.
//!
//! # Example
//!
//! ```rust
//! use news_eda::config::EdaConfig;
//! use news_eda::dataset::Dataset;
//! use news_eda::report::Report;
//!
//! let csv = "id,author,text,label\n0,Ann,the vote,1\n1,Bob,the emails,0\n";
//! let config = EdaConfig::default();
//! let dataset = Dataset::from_reader(csv.as_bytes(), &config.dataset).unwrap();
//!
//! let report = Report::build(&dataset, &config).unwrap();
//! assert_eq!(report.label_counts.real, 1);
//! assert_eq!(report.exclusive_words[0].word, "emails");
//! ```

use std::io::Write;

use serde::Serialize;

use crate::config::EdaConfig;
use crate::counts::{self, AuthorCount, LabelCounts};
use crate::dataset::{Dataset, Row};
use crate::error::Result;
use crate::profile::{self, DatasetInfo, Description, NumericSummary};
use crate::table::{TextTable, MISSING};
use crate::words::{self, Tokenizer, WordCount};

/// Results of every analysis step.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Column names of the dataset.
    pub columns: Vec<String>,
    /// First rows of the dataset.
    pub head: Vec<Row>,
    /// Last rows of the dataset.
    pub tail: Vec<Row>,
    /// Column profile.
    pub info: DatasetInfo,
    /// Summary statistics.
    pub description: Description,
    /// Articles per class.
    pub label_counts: LabelCounts,
    /// Distinct authors across all articles.
    pub unique_authors: usize,
    /// Most prolific authors of fake articles.
    pub fake_authors: Vec<AuthorCount>,
    /// Most prolific authors of real articles.
    pub real_authors: Vec<AuthorCount>,
    /// Most common words in fake articles.
    pub fake_words: Vec<WordCount>,
    /// Most common words in real articles.
    pub real_words: Vec<WordCount>,
    /// Common fake-article words absent from common real-article words.
    pub exclusive_words: Vec<WordCount>,
    #[serde(skip)]
    max_cell_width: usize,
}

impl Report {
    /// Run the full analysis.
    pub fn build(dataset: &Dataset, config: &EdaConfig) -> Result<Self> {
        let analysis = &config.analysis;
        let articles = dataset.articles(&config.labels)?;

        let label_counts = counts::count_labels(&articles);
        let unique_authors = counts::unique_authors(&articles);
        tracing::info!(
            real = label_counts.real,
            fake = label_counts.fake,
            authors = unique_authors,
            "Counted articles"
        );

        let (fake, real) = counts::split_by_label(&articles);

        let mut fake_authors = counts::author_counts(fake.iter().copied());
        let mut real_authors = counts::author_counts(real.iter().copied());
        fake_authors.truncate(analysis.top_authors);
        real_authors.truncate(analysis.top_authors);

        let tokenizer = Tokenizer::new(&config.tokenizer);
        let fake_ranking = words::word_counts(&tokenizer, fake.iter().map(|a| a.text.as_deref()));
        let real_ranking = words::word_counts(&tokenizer, real.iter().map(|a| a.text.as_deref()));
        tracing::debug!(
            fake_vocabulary = fake_ranking.len(),
            real_vocabulary = real_ranking.len(),
            "Counted words"
        );

        let mut exclusive_words =
            words::exclusive_words(&fake_ranking, &real_ranking, analysis.vocabulary_window);
        exclusive_words.truncate(analysis.exclusive_limit);

        Ok(Self {
            columns: dataset.columns().to_vec(),
            head: dataset.head(analysis.preview_rows),
            tail: dataset.tail(analysis.preview_rows),
            info: profile::info(dataset),
            description: profile::describe(dataset),
            label_counts,
            unique_authors,
            fake_authors,
            real_authors,
            fake_words: top(fake_ranking, analysis.top_words),
            real_words: top(real_ranking, analysis.top_words),
            exclusive_words,
            max_cell_width: analysis.max_cell_width,
        })
    }

    /// Write the report as pretty JSON.
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Write the report as plain-text tables.
    pub fn write_text<W: Write>(&self, mut w: W) -> Result<()> {
        writeln!(w, "{}", self.rows_table(&self.head))?;
        writeln!(w, "{}", self.rows_table(&self.tail))?;
        write_info(&mut w, &self.info)?;
        writeln!(w, "{}", self.description_table())?;
        writeln!(w)?;

        writeln!(w, "Real articles: {}", self.label_counts.real)?;
        writeln!(w, "Fake articles: {}", self.label_counts.fake)?;
        writeln!(w, "Number of authors: {}", self.unique_authors)?;

        writeln!(w, "Authors with the most fake articles:")?;
        write!(w, "{}", self.author_table(&self.fake_authors))?;
        writeln!(w, "Authors with the most real articles:")?;
        write!(w, "{}", self.author_table(&self.real_authors))?;

        writeln!(w, "Most common words in fake articles:")?;
        write!(w, "{}", self.word_table(&self.fake_words))?;
        writeln!(w, "Most common words in real articles:")?;
        write!(w, "{}", self.word_table(&self.real_words))?;

        writeln!(
            w,
            "Most common words in fake articles that are not 'much' in real articles:"
        )?;
        write!(w, "{}", self.exclusive_table())?;
        Ok(())
    }

    fn rows_table(&self, rows: &[Row]) -> TextTable {
        let mut table = TextTable::new(&self.columns).with_max_width(self.max_cell_width);
        for row in rows {
            let cells = row
                .cells
                .iter()
                .map(|cell| cell.clone().unwrap_or_else(|| MISSING.to_string()))
                .collect();
            table.push_row(row.index, cells);
        }
        table
    }

    fn author_table(&self, authors: &[AuthorCount]) -> TextTable {
        let mut table =
            TextTable::new(["author", "article_count"]).with_max_width(self.max_cell_width);
        for (i, ac) in authors.iter().enumerate() {
            table.push_row(i, vec![ac.author.clone(), ac.article_count.to_string()]);
        }
        table
    }

    fn description_table(&self) -> TextTable {
        let table = match &self.description {
            Description::Numeric(summaries) => {
                let mut table = TextTable::new(summaries.iter().map(|s| s.name.clone()));
                let stats: [(&str, fn(&NumericSummary) -> Option<f64>); 8] = [
                    ("count", |s| Some(s.count as f64)),
                    ("mean", |s| s.mean),
                    ("std", |s| s.std),
                    ("min", |s| s.min),
                    ("25%", |s| s.q25),
                    ("50%", |s| s.q50),
                    ("75%", |s| s.q75),
                    ("max", |s| s.max),
                ];
                for (label, stat) in stats {
                    let cells = summaries.iter().map(|s| format_stat(stat(s))).collect();
                    table.push_row(label, cells);
                }
                table
            }
            Description::Categorical(summaries) => {
                let mut table = TextTable::new(summaries.iter().map(|s| s.name.clone()));
                table.push_row("count", summaries.iter().map(|s| s.count.to_string()).collect());
                table.push_row("unique", summaries.iter().map(|s| s.unique.to_string()).collect());
                table.push_row(
                    "top",
                    summaries
                        .iter()
                        .map(|s| s.top.clone().unwrap_or_else(|| MISSING.to_string()))
                        .collect(),
                );
                table.push_row("freq", summaries.iter().map(|s| s.freq.to_string()).collect());
                table
            }
        };
        table.with_max_width(self.max_cell_width)
    }

    fn word_table(&self, words: &[WordCount]) -> TextTable {
        let mut table = TextTable::new(["word", "count"]).with_max_width(self.max_cell_width);
        for (i, wc) in words.iter().enumerate() {
            table.push_row(i, vec![wc.word.clone(), wc.count.to_string()]);
        }
        table
    }

    fn exclusive_table(&self) -> TextTable {
        let mut table = TextTable::new(["word", "count_fake", "count_real"])
            .with_max_width(self.max_cell_width);
        for (i, wc) in self.exclusive_words.iter().enumerate() {
            table.push_row(
                i,
                vec![wc.word.clone(), wc.count.to_string(), MISSING.to_string()],
            );
        }
        table
    }
}

fn top<T>(mut ranking: Vec<T>, n: usize) -> Vec<T> {
    ranking.truncate(n);
    ranking
}

fn write_info<W: Write>(w: &mut W, info: &DatasetInfo) -> Result<()> {
    if info.rows == 0 {
        writeln!(w, "RangeIndex: 0 entries")?;
    } else {
        writeln!(w, "RangeIndex: {} entries, 0 to {}", info.rows, info.rows - 1)?;
    }
    writeln!(w, "Data columns (total {} columns):", info.columns.len())?;

    let mut table = TextTable::new(["Column", "Non-Null Count", "Dtype"]);
    for (i, column) in info.columns.iter().enumerate() {
        table.push_row(
            i,
            vec![
                column.name.clone(),
                format!("{} non-null", column.non_null),
                column.dtype.to_string(),
            ],
        );
    }
    write!(w, "{table}")?;

    let mut dtype_counts: Vec<(String, usize)> = Vec::new();
    for column in &info.columns {
        let name = column.dtype.to_string();
        match dtype_counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => dtype_counts.push((name, 1)),
        }
    }
    dtype_counts.sort();
    let summary: Vec<String> = dtype_counts
        .iter()
        .map(|(name, count)| format!("{name}({count})"))
        .collect();
    writeln!(w, "dtypes: {}", summary.join(", "))?;
    Ok(())
}

fn format_stat(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v:.6}"))
}

// ============================================================================
// Tests
// ============================================================================

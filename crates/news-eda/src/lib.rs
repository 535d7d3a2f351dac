//! news-eda — exploratory analysis of labeled news-article datasets.
//!
//! Loads a CSV file with `label`, `author` and `text` columns, profiles its
//! columns, counts articles by class and by author, and contrasts the
//! vocabulary of fake and real articles.
//!
//! # Modules
//!
//! - [`dataset`]: CSV loading and row previews
//! - [`article`]: article records and label classification
//! - [`profile`]: dtype inference and summary statistics
//! - [`counts`]: label and author counts
//! - [`words`]: tokenization, word tallies, exclusive vocabulary
//! - [`stopwords`]: optional stopword removal
//! - [`report`]: the assembled report and its text/JSON output
//! - [`config`]: TOML configuration
//! - [`error`]: error types and Result alias
//!
//! # Architecture
//!
//! ```text
//! CSV ──► Dataset ──► profile (head / tail / info / describe)
//!              └────► Articles ──► label counts, unique authors
//!                            ├──► author counts (fake, real)
//!                            └──► word counts (fake, real) ──► exclusive words
//!                                                   │
//!                                                   ▼
//!                                      Report ──► text | JSON
//! ```

#![forbid(unsafe_code)]

pub mod article;
pub mod config;
pub mod counts;
pub mod dataset;
pub mod error;
pub mod profile;
pub mod report;
pub mod stopwords;
pub mod table;
pub mod words;

// Re-export key types at crate root for convenience
pub use article::{Article, Label};
pub use config::{EdaConfig, OutputFormat};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use report::Report;

//! # news-eda-cli
//!
//! Command-line front end for the news-eda library:
//! - Argument parsing and config overrides
//! - Running the analysis and writing the report
//! - Config file management (`config path|show|get|init`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config_handlers;
pub mod run;

pub use cli::{Cli, Command, ConfigAction};

//! # service_cli
//!
//! Library half of the `portfolio-analyzer` binary: configuration, portfolio
//! file loading, output formatting and the subcommands themselves.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate depends on every pricer
//! crate and adds the file formats and terminal output that the libraries
//! deliberately leave out.
//!
//! ```text
//! analyzer.toml ─┐
//! ANALYZER_*   ──┼─▶ AnalyzerConfig ─┐
//! CLI flags    ──┘                   ├─▶ commands::{price, payoff, simulate} ─▶ table / json / csv
//! portfolio.toml|csv ─▶ loader ──────┘
//! ```

#![warn(missing_docs)]

pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;

pub use config::AnalyzerConfig;
pub use error::{CliError, Result};
pub use loader::load_portfolio;
pub use output::OutputFormat;

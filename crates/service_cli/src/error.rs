//! CLI error types.

use pricer_core::types::PricingError;
use pricer_pricing::mc::ConfigError as SimulationConfigError;
use pricer_risk::portfolio::PortfolioError;
use pricer_risk::PnlError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `portfolio-analyzer`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Analyser configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bad command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A portfolio record could not be turned into an instrument
    #[error("Instrument {index}: {source}")]
    Record {
        /// Zero-based position of the record in the file
        index: usize,
        /// Underlying failure
        #[source]
        source: PricingError,
    },

    /// Pricing error outside record loading
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Simulation settings rejected
    #[error(transparent)]
    Simulation(#[from] SimulationConfigError),

    /// PnL engine failure
    #[error(transparent)]
    Pnl(#[from] PnlError),

    /// Payoff diagram grid rejected
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML portfolio could not be parsed
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV portfolio could not be read, or CSV output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

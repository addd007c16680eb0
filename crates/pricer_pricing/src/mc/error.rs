//! Error types for simulation configuration.

use thiserror::Error;

use super::config::MAX_SIMULATIONS;

/// Configuration error for Monte Carlo simulation.
///
/// These errors occur before any random number is drawn, when a simulation
/// count or scenario parameter is out of range.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Simulation count outside valid range [1, 100_000].
    #[error("Invalid simulation count {0}: must be in range [1, {max}]", max = MAX_SIMULATIONS)]
    InvalidSimulationCount(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

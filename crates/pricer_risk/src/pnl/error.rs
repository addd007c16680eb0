//! PnL simulation error types.

use pricer_core::types::PricingError;
use pricer_pricing::mc::ConfigError;
use thiserror::Error;

/// Errors raised by the PnL engine and statistics summariser.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PnlError {
    /// Simulation configuration or scenario parameter out of range.
    #[error("Simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Market inputs rejected while building the pricing context.
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Statistics requested over no samples.
    #[error("Cannot summarise an empty sample")]
    EmptySample,
}

//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors raised when instruments or market inputs cannot be
//!   turned into a valuation

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or instrument parameters
/// - `UnsupportedInstrument`: Instrument kind not known to the pricer
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
///
/// let err = PricingError::UnsupportedInstrument("swap".to_string());
/// assert_eq!(format!("{}", err), "Unsupported instrument: swap");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Instrument kind not supported
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

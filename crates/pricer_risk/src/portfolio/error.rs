//! Portfolio error types.
//!
//! This module provides structured error types for portfolio operations
//! using `thiserror` for derivation.

use thiserror::Error;

/// Errors that can occur during portfolio operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortfolioError {
    /// Spot range is empty, reversed, negative or non-finite.
    #[error("Invalid spot range: [{lower}, {upper}], need 0 <= lower < upper")]
    InvalidRange {
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
    },

    /// Spot grid needs at least both endpoints.
    #[error("Invalid grid size: {0} points, need at least 2")]
    TooFewPoints(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_range() {
        let err = PortfolioError::InvalidRange {
            lower: 110.0,
            upper: 90.0,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid spot range: [110, 90], need 0 <= lower < upper"
        );
    }

    #[test]
    fn test_error_display_too_few_points() {
        let err = PortfolioError::TooFewPoints(1);
        assert_eq!(format!("{}", err), "Invalid grid size: 1 points, need at least 2");
    }
}

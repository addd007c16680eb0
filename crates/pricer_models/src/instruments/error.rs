//! Instrument validation errors.
//!
//! Every instrument constructor validates its inputs eagerly and reports the
//! first offending field. No instrument is ever partially constructed.

use num_traits::Float;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Construction-time validation failures.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidSpot`: Reference spot price is non-positive
/// - `InvalidMaturity`: Maturity is negative
/// - `InvalidVolatility`: Volatility is non-positive
/// - `NonFiniteParameter`: A signed parameter (rate, quantity, face value) is NaN or infinite
/// - `UnknownOptionKind`: Option kind is neither call nor put
///
/// # Examples
/// ```
/// use pricer_models::instruments::ValidationError;
///
/// let err = ValidationError::InvalidStrike { strike: -100.0 };
/// assert_eq!(err.field(), "strike");
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}, must be positive")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid reference spot price (non-positive).
    #[error("Invalid spot: S = {spot}, must be positive")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid maturity (negative).
    #[error("Invalid maturity: T = {maturity}, must be non-negative")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}, must be positive")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// A parameter that may take any sign is NaN or infinite.
    #[error("Invalid {name}: {value}, must be finite")]
    NonFiniteParameter {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Unrecognised option kind.
    #[error("Unknown option kind '{kind}': expected 'call' or 'put'")]
    UnknownOptionKind {
        /// The kind as supplied by the caller
        kind: String,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidStrike { .. } => "strike",
            ValidationError::InvalidSpot { .. } => "spot",
            ValidationError::InvalidMaturity { .. } => "maturity",
            ValidationError::InvalidVolatility { .. } => "volatility",
            ValidationError::NonFiniteParameter { name, .. } => *name,
            ValidationError::UnknownOptionKind { .. } => "kind",
        }
    }

    pub(crate) fn check_strike<T: Float>(strike: T) -> Result<(), Self> {
        if strike > T::zero() && strike.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::InvalidStrike {
                strike: as_f64(strike),
            })
        }
    }

    pub(crate) fn check_spot<T: Float>(spot: T) -> Result<(), Self> {
        if spot > T::zero() && spot.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::InvalidSpot { spot: as_f64(spot) })
        }
    }

    pub(crate) fn check_maturity<T: Float>(maturity: T) -> Result<(), Self> {
        if maturity >= T::zero() && maturity.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::InvalidMaturity {
                maturity: as_f64(maturity),
            })
        }
    }

    pub(crate) fn check_volatility<T: Float>(volatility: T) -> Result<(), Self> {
        if volatility > T::zero() && volatility.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::InvalidVolatility {
                volatility: as_f64(volatility),
            })
        }
    }

    pub(crate) fn check_finite<T: Float>(name: &'static str, value: T) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::NonFiniteParameter {
                name,
                value: as_f64(value),
            })
        }
    }
}

#[inline]
fn as_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl From<ValidationError> for PricingError {
    fn from(err: ValidationError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

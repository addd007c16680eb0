//! Caller-supplied market context.

use num_traits::Float;

use crate::types::PricingError;

/// Market parameters for a single valuation.
///
/// Instruments that do not carry their own market snapshot (debt, forwards)
/// are priced against a `MarketContext` supplied per call.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use pricer_core::market_data::MarketContext;
///
/// let market = MarketContext::new(100.0_f64, 0.05, 1.0).unwrap();
/// let df = market.discount_factor();
/// assert!((df - 0.951229).abs() < 1e-6);
///
/// // Non-positive spot is rejected
/// assert!(MarketContext::new(0.0_f64, 0.05, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketContext<T: Float> {
    spot: T,
    rate: T,
    maturity: T,
}

impl<T: Float> MarketContext<T> {
    /// Creates a validated market context.
    ///
    /// # Arguments
    ///
    /// * `spot` - Underlying spot price (must be positive and finite)
    /// * `rate` - Continuously compounded risk-free rate (must be finite)
    /// * `maturity` - Time to maturity in years (must be non-negative and finite)
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidInput` naming the offending field.
    pub fn new(spot: T, rate: T, maturity: T) -> Result<Self, PricingError> {
        let zero = T::zero();

        if !(spot > zero) || !spot.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "spot must be positive, got {}",
                spot.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if !rate.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "rate must be finite, got {}",
                rate.to_f64().unwrap_or(f64::NAN)
            )));
        }
        if !(maturity >= zero) || !maturity.is_finite() {
            return Err(PricingError::InvalidInput(format!(
                "maturity must be non-negative, got {}",
                maturity.to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(Self {
            spot,
            rate,
            maturity,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Discount factor `exp(-r * T)`.
    #[inline]
    pub fn discount_factor(&self) -> T {
        (-self.rate * self.maturity).exp()
    }

    /// Compounding factor `exp(r * T)`.
    #[inline]
    pub fn growth_factor(&self) -> T {
        (self.rate * self.maturity).exp()
    }

    /// Cost-of-carry forward price `S * exp(r * T)`.
    #[inline]
    pub fn forward_price(&self) -> T {
        self.spot * self.growth_factor()
    }
}

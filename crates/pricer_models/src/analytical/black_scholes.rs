//! Black-Scholes-Merton pricing for European options without dividends.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! At expiry (T = 0) both prices collapse to intrinsic value.

use num_traits::Float;

use super::distributions::norm_cdf;
use crate::instruments::{OptionKind, ValidationError};

/// Expiries at or below this are treated as already expired.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes model for European option pricing.
///
/// Holds the market side of the formula (spot, rate, volatility); strike
/// and expiry are supplied per call.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `ValidationError::InvalidSpot` if spot <= 0
    /// - `ValidationError::InvalidVolatility` if volatility <= 0
    /// - `ValidationError::NonFiniteParameter` if rate is not finite
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, ValidationError> {
        ValidationError::check_spot(spot)?;
        ValidationError::check_finite("rate", rate)?;
        ValidationError::check_volatility(volatility)?;
        Ok(Self::from_validated(spot, rate, volatility))
    }

    /// Builds the model from inputs already validated by an instrument or a
    /// market context.
    #[inline]
    pub(crate) fn from_validated(spot: T, rate: T, volatility: T) -> Self {
        Self {
            spot,
            rate,
            volatility,
        }
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

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    #[inline]
    fn is_expired(expiry: T) -> bool {
        expiry <= T::from(EXPIRY_EPSILON).unwrap_or_else(T::zero)
    }

    /// Computes d₁ and d₂ for a live option.
    ///
    /// Callers must handle expired options first; at T = 0 both terms are
    /// undefined.
    #[inline]
    pub fn d1_d2(&self, strike: T, expiry: T) -> (T, T) {
        let half = T::from(0.5).unwrap_or_else(T::nan);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// Computes European call option price.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!((bs.price_call(100.0, 1.0) - 10.450_583_572).abs() < 1e-4);
    ///
    /// // Expired: intrinsic value
    /// assert_eq!(bs.price_call(90.0, 0.0), 10.0);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if Self::is_expired(expiry) {
            return (self.spot - strike).max(T::zero());
        }

        let (d1, d2) = self.d1_d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();
        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
    /// assert!((bs.price_put(100.0, 1.0) - 5.573_526_022).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if Self::is_expired(expiry) {
            return (strike - self.spot).max(T::zero());
        }

        let (d1, d2) = self.d1_d2(strike, expiry);
        let discount = (-self.rate * expiry).exp();
        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices a call or a put by kind.
    #[inline]
    pub fn price(&self, kind: OptionKind, strike: T, expiry: T) -> T {
        match kind {
            OptionKind::Call => self.price_call(strike, expiry),
            OptionKind::Put => self.price_put(strike, expiry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_new_rejects_bad_inputs() {
        assert!(matches!(
            BlackScholes::new(0.0_f64, 0.05, 0.2),
            Err(ValidationError::InvalidSpot { .. })
        ));
        assert!(matches!(
            BlackScholes::new(100.0_f64, 0.05, 0.0),
            Err(ValidationError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            BlackScholes::new(100.0_f64, f64::INFINITY, 0.2),
            Err(ValidationError::NonFiniteParameter { name: "rate", .. })
        ));
    }

    #[test]
    fn test_reference_prices() {
        // Hull, Options Futures and Other Derivatives, example 15.6
        let bs = BlackScholes::new(42.0_f64, 0.10, 0.20).unwrap();
        assert_relative_eq!(bs.price_call(40.0, 0.5), 4.759_422_392, epsilon = 1e-5);
        assert_relative_eq!(bs.price_put(40.0, 0.5), 0.808_599_372, epsilon = 1e-5);
    }

    #[test]
    fn test_expired_prices_are_intrinsic() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.price_call(100.0, 0.0), 0.0);
        assert_eq!(bs.price_call(80.0, 0.0), 20.0);
        assert_eq!(bs.price_put(80.0, 0.0), 0.0);
        assert_eq!(bs.price_put(120.0, 0.0), 20.0);
    }

    #[test]
    fn test_price_by_kind() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        assert_eq!(bs.price(OptionKind::Call, 95.0, 0.5), bs.price_call(95.0, 0.5));
        assert_eq!(bs.price(OptionKind::Put, 95.0, 0.5), bs.price_put(95.0, 0.5));
    }

    #[test]
    fn test_deep_itm_call_approaches_forward_value() {
        let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
        let price = bs.price_call(1.0, 1.0);
        assert_relative_eq!(price, 100.0 - (-0.05_f64).exp(), epsilon = 1e-6);
    }

    proptest! {
        #[test]
        fn prop_put_call_parity(
            spot in 10.0..500.0_f64,
            strike in 10.0..500.0_f64,
            rate in -0.02..0.15_f64,
            vol in 0.05..1.0_f64,
            expiry in 0.01..5.0_f64,
        ) {
            let bs = BlackScholes::new(spot, rate, vol).unwrap();
            let lhs = bs.price_call(strike, expiry) - bs.price_put(strike, expiry);
            let rhs = spot - strike * (-rate * expiry).exp();
            prop_assert!((lhs - rhs).abs() < 1e-6 * spot.max(strike));
        }

        #[test]
        fn prop_prices_are_non_negative(
            spot in 1.0..500.0_f64,
            strike in 1.0..500.0_f64,
            vol in 0.05..1.0_f64,
            expiry in 0.0..5.0_f64,
        ) {
            let bs = BlackScholes::new(spot, 0.03, vol).unwrap();
            // Approximation error of Φ may push a worthless option a hair below zero
            prop_assert!(bs.price_call(strike, expiry) > -1e-5 * spot.max(strike));
            prop_assert!(bs.price_put(strike, expiry) > -1e-5 * spot.max(strike));
        }
    }
}

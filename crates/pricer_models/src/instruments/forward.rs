//! Forward contract definitions.
//!
//! A forward is a linear derivative: it pays `quantity * (S - K)` at
//! delivery with no floor or cap. A negative quantity is a short forward.

use std::fmt;

use num_traits::Float;
use pricer_core::market_data::MarketContext;
use pricer_core::traits::{Payoff, Priceable};

use super::error::ValidationError;

/// Forward contract instrument.
///
/// Unlike options, a forward stores no market snapshot. It is priced on the
/// caller's [`MarketContext`] by cost of carry:
///
/// ```text
/// F = S · exp(r·T)
/// PV = quantity · (F − K) · exp(−r·T)
/// ```
///
/// # Examples
/// ```
/// use pricer_core::traits::Payoff;
/// use pricer_models::instruments::Forward;
///
/// let short = Forward::new(100.0_f64, -2.0).unwrap();
/// assert_eq!(short.payoff_vec(&[90.0, 100.0, 130.0]), vec![20.0, 0.0, -60.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Forward<T: Float> {
    strike: T,
    quantity: T,
}

impl<T: Float> Forward<T> {
    /// Creates a new forward contract.
    ///
    /// # Arguments
    /// * `strike` - Delivery price (must be positive)
    /// * `quantity` - Signed number of units (must be finite)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::Forward;
    ///
    /// assert!(Forward::new(100.0_f64, 1.0).is_ok());
    /// assert!(Forward::new(-100.0_f64, 1.0).is_err());
    /// ```
    pub fn new(strike: T, quantity: T) -> Result<Self, ValidationError> {
        ValidationError::check_strike(strike)?;
        ValidationError::check_finite("quantity", quantity)?;
        Ok(Self { strike, quantity })
    }

    /// Returns the delivery price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the signed quantity.
    #[inline]
    pub fn quantity(&self) -> T {
        self.quantity
    }

    /// Present value on the given market.
    pub fn price(&self, market: &MarketContext<T>) -> T {
        self.quantity * (market.forward_price() - self.strike) * market.discount_factor()
    }
}

impl<T: Float> Payoff<T> for Forward<T> {
    #[inline]
    fn payoff(&self, spot: T) -> T {
        (spot - self.strike) * self.quantity
    }
}

impl<T: Float> Priceable<T> for Forward<T> {
    fn price(&self, market: &MarketContext<T>) -> T {
        Forward::price(self, market)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Forward<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Forward K={} qty={}", self.strike, self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_new_validates() {
        assert_eq!(Forward::new(0.0_f64, 1.0).unwrap_err().field(), "strike");
        assert_eq!(
            Forward::new(100.0_f64, f64::NAN).unwrap_err().field(),
            "quantity"
        );
    }

    #[test]
    fn test_payoff_is_zero_at_strike() {
        let fwd = Forward::new(100.0_f64, 3.0).unwrap();
        assert_eq!(fwd.payoff(100.0), 0.0);
    }

    #[test]
    fn test_payoff_is_unbounded() {
        let fwd = Forward::new(100.0_f64, 1.0).unwrap();
        assert_eq!(fwd.payoff(0.0), -100.0);
        assert_eq!(fwd.payoff(1.0e6), 1.0e6 - 100.0);
    }

    #[test]
    fn test_price_cost_of_carry() {
        let fwd = Forward::new(95.0_f64, 2.0).unwrap();
        let market = MarketContext::new(100.0, 0.05, 1.0).unwrap();
        // PV = q·(S − K·e^{−rT})
        let expected = 2.0 * (100.0 - 95.0 * (-0.05_f64).exp());
        assert_relative_eq!(fwd.price(&market), expected, epsilon = 1e-10);
    }

    #[test]
    fn test_price_at_zero_maturity() {
        let fwd = Forward::new(95.0_f64, 1.0).unwrap();
        let market = MarketContext::new(100.0, 0.05, 0.0).unwrap();
        assert_relative_eq!(fwd.price(&market), 5.0, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_payoff_is_affine(
            strike in 1.0..200.0_f64,
            quantity in -50.0..50.0_f64,
            spot in 0.0..400.0_f64,
        ) {
            let fwd = Forward::new(strike, quantity).unwrap();
            prop_assert_eq!(fwd.payoff(spot), quantity * (spot - strike));
        }
    }
}

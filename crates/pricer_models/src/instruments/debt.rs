//! Zero-coupon debt.

use std::fmt;

use num_traits::Float;
use pricer_core::market_data::MarketContext;
use pricer_core::traits::{Payoff, Priceable};

use super::error::ValidationError;

/// Zero-coupon debt position repaying `face_value` at maturity.
///
/// A negative face value is a borrowing. The payoff does not depend on the
/// underlying: every scenario receives `face_value * quantity`. Time value
/// enters only through [`price`](Debt::price), which discounts at the
/// caller's rate and maturity.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketContext;
/// use pricer_core::traits::Payoff;
/// use pricer_models::instruments::Debt;
///
/// let loan = Debt::new(-10.0_f64).unwrap();
/// assert_eq!(loan.payoff_vec(&[1.0, 50.0, 500.0]), vec![-10.0; 3]);
///
/// let market = MarketContext::new(100.0, 0.05, 2.0).unwrap();
/// assert!((loan.price(&market) + 10.0 * (-0.1_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Debt<T: Float> {
    face_value: T,
    quantity: T,
}

impl<T: Float> Debt<T> {
    /// Creates a single unit of debt with the given face value.
    pub fn new(face_value: T) -> Result<Self, ValidationError> {
        ValidationError::check_finite("face_value", face_value)?;
        Ok(Self {
            face_value,
            quantity: T::one(),
        })
    }

    /// Sets the number of units held.
    pub fn with_quantity(mut self, quantity: T) -> Result<Self, ValidationError> {
        ValidationError::check_finite("quantity", quantity)?;
        self.quantity = quantity;
        Ok(self)
    }

    /// Returns the face value of one unit.
    #[inline]
    pub fn face_value(&self) -> T {
        self.face_value
    }

    /// Returns the number of units.
    #[inline]
    pub fn quantity(&self) -> T {
        self.quantity
    }

    /// Discounted face value on the given market.
    pub fn price(&self, market: &MarketContext<T>) -> T {
        self.face_value * self.quantity * market.discount_factor()
    }
}

impl<T: Float> Payoff<T> for Debt<T> {
    #[inline]
    fn payoff(&self, _spot: T) -> T {
        self.face_value * self.quantity
    }
}

impl<T: Float> Priceable<T> for Debt<T> {
    fn price(&self, market: &MarketContext<T>) -> T {
        Debt::price(self, market)
    }
}

impl<T: Float + fmt::Display> fmt::Display for Debt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Debt face={} qty={}", self.face_value, self.quantity)
    }
}

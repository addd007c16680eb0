//! Traits for instruments that have a terminal payoff and a present value.
//!
//! All traits are designed for static dispatch: implement them on each
//! instrument struct and on the enum that wraps them, then match on the enum.

use num_traits::Float;

use crate::market_data::MarketContext;

/// Trait for entities with a payoff at expiry.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Invariants
/// - `payoff` is pure: same spot, same result
/// - `payoff_vec` returns exactly one value per input spot, in input order
///
/// # Examples
/// ```
/// use pricer_core::traits::Payoff;
///
/// struct Linear {
///     strike: f64,
/// }
///
/// impl Payoff<f64> for Linear {
///     fn payoff(&self, spot: f64) -> f64 {
///         spot - self.strike
///     }
/// }
///
/// let fwd = Linear { strike: 100.0 };
/// assert_eq!(fwd.payoff_vec(&[90.0, 100.0, 110.0]), vec![-10.0, 0.0, 10.0]);
/// ```
pub trait Payoff<T: Float> {
    /// Payoff at a single terminal spot price.
    fn payoff(&self, spot: T) -> T;

    /// Element-wise payoff over a vector of spot prices.
    fn payoff_vec(&self, spots: &[T]) -> Vec<T> {
        spots.iter().map(|&s| self.payoff(s)).collect()
    }

    /// Adds the payoff at each spot into `out`.
    ///
    /// `out` and `spots` must have the same length; extra elements in either
    /// slice are left untouched.
    fn accumulate_payoff(&self, spots: &[T], out: &mut [T]) {
        for (acc, &s) in out.iter_mut().zip(spots) {
            *acc = *acc + self.payoff(s);
        }
    }
}

/// Trait for entities that can be priced.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Design Philosophy
///
/// The market context is always passed explicitly. Implementations decide
/// which fields they read; an instrument that carries its own market snapshot
/// may ignore the context entirely.
///
/// ```
/// use pricer_core::market_data::MarketContext;
/// use pricer_core::traits::Priceable;
///
/// struct ZeroCoupon {
///     face: f64,
/// }
///
/// impl Priceable<f64> for ZeroCoupon {
///     fn price(&self, market: &MarketContext<f64>) -> f64 {
///         self.face * market.discount_factor()
///     }
/// }
///
/// let market = MarketContext::new(100.0, 0.05, 1.0).unwrap();
/// let zc = ZeroCoupon { face: 100.0 };
/// assert!((zc.price(&market) - 100.0 * (-0.05_f64).exp()).abs() < 1e-12);
/// ```
pub trait Priceable<T: Float> {
    /// Calculate the present value of the instrument.
    ///
    /// # Invariants
    /// - The method must be pure (no side effects, deterministic)
    /// - The sign follows the position: short positions price negative
    fn price(&self, market: &MarketContext<T>) -> T;
}

//! Capability traits shared by every instrument.
//!
//! This module defines the two operations the portfolio layer relies on:
//! - Payoff evaluation at expiry (`Payoff` trait)
//! - Present value given a market context (`Priceable` trait)
//!
//! Instruments are dispatched through an enum in `pricer_models`; the
//! aggregation layer only ever talks to these traits.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

pub mod priceable;

pub use priceable::{Payoff, Priceable};

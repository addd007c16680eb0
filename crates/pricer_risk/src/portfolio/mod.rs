//! Portfolio structures and aggregation.
//!
//! A [`Portfolio`] is an ordered list of instruments. Duplicates are allowed
//! and order only matters for display: every aggregate is a plain sum.
//!
//! - [`aggregation`]: payoff and cost sums across instruments
//! - [`diagram`]: payoff of the whole book over an evenly spaced spot grid
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{Debt, EuropeanOption, OptionKind};
//! use pricer_risk::portfolio::{aggregate_payoff, Portfolio};
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.push(Debt::new(-10.0_f64).unwrap());
//! portfolio.push(EuropeanOption::builder(OptionKind::Put, 30.0).build().unwrap());
//!
//! assert_eq!(portfolio.len(), 2);
//! assert_eq!(aggregate_payoff(&portfolio, &[20.0, 50.0]), vec![0.0, -10.0]);
//! ```

pub mod aggregation;
pub mod diagram;
mod error;

pub use aggregation::{
    aggregate_cost, aggregate_initial_cost, aggregate_market_cost, aggregate_payoff,
    aggregate_payoff_parallel, aggregate_payoff_with_config,
};
pub use diagram::PayoffDiagram;
pub use error::PortfolioError;

use pricer_core::traits::Float;
use pricer_models::instruments::Instrument;

/// Ordered collection of instruments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Portfolio<T: Float> {
    instruments: Vec<Instrument<T>>,
}

impl<T: Float> Portfolio<T> {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self {
            instruments: Vec::new(),
        }
    }

    /// Appends an instrument, keeping insertion order.
    pub fn push(&mut self, instrument: impl Into<Instrument<T>>) {
        self.instruments.push(instrument.into());
    }

    /// Number of instruments.
    #[inline]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Returns `true` if the portfolio holds no instruments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Instruments in insertion order.
    #[inline]
    pub fn instruments(&self) -> &[Instrument<T>] {
        &self.instruments
    }

    /// Iterates over instruments in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Instrument<T>> {
        self.instruments.iter()
    }
}

impl<T: Float> Default for Portfolio<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> From<Vec<Instrument<T>>> for Portfolio<T> {
    fn from(instruments: Vec<Instrument<T>>) -> Self {
        Self { instruments }
    }
}

impl<T: Float> FromIterator<Instrument<T>> for Portfolio<T> {
    fn from_iter<I: IntoIterator<Item = Instrument<T>>>(iter: I) -> Self {
        Self {
            instruments: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Float> IntoIterator for &'a Portfolio<T> {
    type Item = &'a Instrument<T>;
    type IntoIter = std::slice::Iter<'a, Instrument<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.instruments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::{Debt, Forward};

    #[test]
    fn test_push_preserves_order() {
        let mut portfolio = Portfolio::new();
        portfolio.push(Forward::new(100.0_f64, 1.0).unwrap());
        portfolio.push(Debt::new(5.0_f64).unwrap());

        let kinds: Vec<_> = portfolio.iter().map(|i| i.kind().as_str()).collect();
        assert_eq!(kinds, vec!["forward", "debt"]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let fwd: Instrument<f64> = Forward::new(100.0, 1.0).unwrap().into();
        let portfolio: Portfolio<f64> = vec![fwd, fwd, fwd].into_iter().collect();
        assert_eq!(portfolio.len(), 3);
    }

    #[test]
    fn test_empty() {
        let portfolio: Portfolio<f64> = Portfolio::default();
        assert!(portfolio.is_empty());
        assert_eq!((&portfolio).into_iter().count(), 0);
    }
}

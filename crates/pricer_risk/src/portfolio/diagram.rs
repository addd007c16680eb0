//! Payoff diagram over a spot range.

use pricer_core::traits::{Float, Payoff};

use super::{aggregate_payoff, Portfolio, PortfolioError};

/// Portfolio payoff sampled on an evenly spaced spot grid.
///
/// Holds the grid, the total payoff at each grid point and one payoff
/// series per instrument, in portfolio order.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::Forward;
/// use pricer_risk::portfolio::{PayoffDiagram, Portfolio};
///
/// let mut portfolio = Portfolio::new();
/// portfolio.push(Forward::new(100.0_f64, 1.0).unwrap());
///
/// let diagram = PayoffDiagram::over_range(&portfolio, 90.0, 110.0, 21).unwrap();
/// assert_eq!(diagram.spots().len(), 21);
/// assert_eq!(diagram.total()[10], 0.0);
/// assert_eq!(diagram.total()[20], 10.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PayoffDiagram<T: Float> {
    spots: Vec<T>,
    total: Vec<T>,
    by_instrument: Vec<Vec<T>>,
}

impl<T: Float> PayoffDiagram<T> {
    /// Evaluates `portfolio` on `points` evenly spaced spots from `lower`
    /// to `upper`, both inclusive.
    ///
    /// # Errors
    ///
    /// - `PortfolioError::TooFewPoints` if `points < 2`
    /// - `PortfolioError::InvalidRange` unless `0 <= lower < upper`, both finite
    pub fn over_range(
        portfolio: &Portfolio<T>,
        lower: T,
        upper: T,
        points: usize,
    ) -> Result<Self, PortfolioError> {
        if points < 2 {
            return Err(PortfolioError::TooFewPoints(points));
        }
        if !(lower >= T::zero() && lower < upper && upper.is_finite()) {
            return Err(PortfolioError::InvalidRange {
                lower: lower.to_f64().unwrap_or(f64::NAN),
                upper: upper.to_f64().unwrap_or(f64::NAN),
            });
        }

        let spots = linspace(lower, upper, points);
        Ok(Self::at_spots(portfolio, spots))
    }

    /// Evaluates `portfolio` at caller-supplied spots.
    pub fn at_spots(portfolio: &Portfolio<T>, spots: Vec<T>) -> Self {
        let total = aggregate_payoff(portfolio, &spots);
        let by_instrument = portfolio.iter().map(|i| i.payoff_vec(&spots)).collect();
        Self {
            spots,
            total,
            by_instrument,
        }
    }

    /// Spot grid.
    #[inline]
    pub fn spots(&self) -> &[T] {
        &self.spots
    }

    /// Total portfolio payoff at each spot.
    #[inline]
    pub fn total(&self) -> &[T] {
        &self.total
    }

    /// Payoff series per instrument, in portfolio order.
    #[inline]
    pub fn by_instrument(&self) -> &[Vec<T>] {
        &self.by_instrument
    }

    /// Iterates over `(spot, total payoff)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.spots.iter().copied().zip(self.total.iter().copied())
    }
}

/// `points` evenly spaced values with exact endpoints.
fn linspace<T: Float>(lower: T, upper: T, points: usize) -> Vec<T> {
    let last = points - 1;
    let step = (upper - lower) / T::from(last).unwrap_or_else(T::nan);
    (0..points)
        .map(|i| {
            if i == last {
                upper
            } else {
                lower + step * T::from(i).unwrap_or_else(T::nan)
            }
        })
        .collect()
}

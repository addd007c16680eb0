//! Payoff and cost aggregation across a portfolio.
//!
//! Every function here is a sum over instruments through the `Payoff` and
//! `Priceable` traits; no variant is special-cased beyond the option cost
//! basis choice.

use pricer_core::market_data::MarketContext;
use pricer_core::traits::{Float, Payoff, Priceable};
use pricer_pricing::mc::CostBasis;
use rayon::prelude::*;

use super::Portfolio;
use crate::parallel::ParallelConfig;

/// Element-wise sum of every instrument's payoff over `spots`.
///
/// The output has the same length as `spots`. An empty portfolio yields
/// zeros.
pub fn aggregate_payoff<T: Float>(portfolio: &Portfolio<T>, spots: &[T]) -> Vec<T> {
    let mut total = vec![T::zero(); spots.len()];
    for instrument in portfolio {
        instrument.accumulate_payoff(spots, &mut total);
    }
    total
}

/// [`aggregate_payoff`] evaluated over spot chunks on the rayon pool.
///
/// Falls back to the sequential path below the parallel threshold. The
/// result is identical to the sequential one, element for element.
pub fn aggregate_payoff_parallel<T>(portfolio: &Portfolio<T>, spots: &[T]) -> Vec<T>
where
    T: Float + Send + Sync,
{
    aggregate_payoff_with_config(portfolio, spots, &ParallelConfig::default())
}

/// [`aggregate_payoff_parallel`] with explicit chunking.
pub fn aggregate_payoff_with_config<T>(
    portfolio: &Portfolio<T>,
    spots: &[T],
    config: &ParallelConfig,
) -> Vec<T>
where
    T: Float + Send + Sync,
{
    if !config.should_parallelize(spots.len()) {
        return aggregate_payoff(portfolio, spots);
    }

    let mut total = vec![T::zero(); spots.len()];
    total
        .par_chunks_mut(config.chunk_size)
        .zip(spots.par_chunks(config.chunk_size))
        .for_each(|(out, chunk)| {
            for instrument in portfolio {
                instrument.accumulate_payoff(chunk, out);
            }
        });
    total
}

/// Initial cost with options priced on their own stored snapshots.
///
/// Debt and forwards are priced on `market`.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketContext;
/// use pricer_models::instruments::{Debt, EuropeanOption, OptionKind};
/// use pricer_risk::portfolio::{aggregate_initial_cost, Portfolio};
///
/// let option = EuropeanOption::builder(OptionKind::Call, 100.0_f64).build().unwrap();
/// let mut portfolio = Portfolio::new();
/// portfolio.push(option);
/// portfolio.push(Debt::new(50.0).unwrap());
///
/// let market = MarketContext::new(100.0, 0.05, 1.0).unwrap();
/// let cost = aggregate_initial_cost(&portfolio, &market);
/// let expected = option.price() + 50.0 * (-0.05_f64).exp();
/// assert!((cost - expected).abs() < 1e-12);
/// ```
pub fn aggregate_initial_cost<T: Float>(portfolio: &Portfolio<T>, market: &MarketContext<T>) -> T {
    portfolio
        .iter()
        .fold(T::zero(), |acc, instrument| acc + instrument.price(market))
}

/// Initial cost with every instrument, options included, priced on
/// `market`. Options keep their own volatility.
pub fn aggregate_market_cost<T: Float>(portfolio: &Portfolio<T>, market: &MarketContext<T>) -> T {
    portfolio.iter().fold(T::zero(), |acc, instrument| {
        acc + instrument.price_at_market(market)
    })
}

/// Initial cost under the given basis.
#[inline]
pub fn aggregate_cost<T: Float>(
    portfolio: &Portfolio<T>,
    market: &MarketContext<T>,
    basis: CostBasis,
) -> T {
    match basis {
        CostBasis::Snapshot => aggregate_initial_cost(portfolio, market),
        CostBasis::Market => aggregate_market_cost(portfolio, market),
    }
}

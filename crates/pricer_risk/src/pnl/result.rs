//! Simulation result record.

use super::PnlStatistics;

/// Outcome of one PnL simulation.
///
/// Immutable once built; `pnl_samples` and `terminal_prices` always have
/// the same length, one entry per simulation, index-aligned.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationResult {
    initial_cost: f64,
    future_cost: f64,
    seed: u64,
    statistics: PnlStatistics,
    pnl_samples: Vec<f64>,
    terminal_prices: Vec<f64>,
}

impl SimulationResult {
    pub(crate) fn new(
        initial_cost: f64,
        future_cost: f64,
        seed: u64,
        statistics: PnlStatistics,
        pnl_samples: Vec<f64>,
        terminal_prices: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(pnl_samples.len(), terminal_prices.len());
        Self {
            initial_cost,
            future_cost,
            seed,
            statistics,
            pnl_samples,
            terminal_prices,
        }
    }

    /// Present cost of the portfolio.
    #[inline]
    pub fn initial_cost(&self) -> f64 {
        self.initial_cost
    }

    /// Initial cost compounded at the risk-free rate to the horizon.
    #[inline]
    pub fn future_cost(&self) -> f64 {
        self.future_cost
    }

    /// Seed of the random stream; replaying it reproduces the run.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Summary statistics of the PnL samples.
    #[inline]
    pub fn statistics(&self) -> &PnlStatistics {
        &self.statistics
    }

    /// PnL per simulation.
    #[inline]
    pub fn pnl_samples(&self) -> &[f64] {
        &self.pnl_samples
    }

    /// Simulated terminal price per simulation.
    #[inline]
    pub fn terminal_prices(&self) -> &[f64] {
        &self.terminal_prices
    }

    /// Number of simulations.
    #[inline]
    pub fn len(&self) -> usize {
        self.pnl_samples.len()
    }

    /// Always `false` for an engine-produced result.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pnl_samples.is_empty()
    }

    /// Mean PnL.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.statistics.mean
    }

    /// Standard deviation of PnL.
    #[inline]
    pub fn std(&self) -> f64 {
        self.statistics.std
    }

    /// Standard error of the mean PnL.
    pub fn standard_error(&self) -> f64 {
        self.statistics.std / (self.len() as f64).sqrt()
    }
}

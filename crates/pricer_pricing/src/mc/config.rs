//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for portfolio PnL
//! simulations.

use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;

/// Maximum number of simulations allowed per run.
pub const MAX_SIMULATIONS: usize = 100_000;

/// Number of simulations used when none is specified.
pub const DEFAULT_SIMULATIONS: usize = 10_000;

/// Market inputs used to price options for the initial cost.
///
/// Debt and forwards are always priced on the simulation scenario. Options
/// carry their own market snapshot; this selects whether it is used.
///
/// - `Snapshot`: Options priced on their own stored spot, rate and maturity
/// - `Market`: Options priced on the scenario's spot, rate and maturity,
///   keeping their own volatility
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CostBasis {
    /// Each option's stored market snapshot.
    #[default]
    Snapshot,

    /// The simulation scenario's market.
    Market,
}

impl CostBasis {
    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            CostBasis::Snapshot => "snapshot",
            CostBasis::Market => "market",
        }
    }
}

impl FromStr for CostBasis {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snapshot" => Ok(CostBasis::Snapshot),
            "market" => Ok(CostBasis::Market),
            other => Err(ConfigError::InvalidParameter {
                name: "cost_basis",
                value: format!("'{}', expected 'snapshot' or 'market'", other),
            }),
        }
    }
}

impl fmt::Display for CostBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{CostBasis, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_simulations(50_000)
///     .seed(42)
///     .cost_basis(CostBasis::Market)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_simulations(), 50_000);
/// assert_eq!(config.seed(), Some(42));
/// assert!(!config.parallel());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationConfig {
    /// Number of terminal-price samples.
    n_simulations: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Market inputs for option cost.
    cost_basis: CostBasis,
    /// Evaluate payoffs on the rayon pool.
    parallel: bool,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulations.
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns the cost basis for options.
    #[inline]
    pub fn cost_basis(&self) -> CostBasis {
        self.cost_basis
    }

    /// Returns whether payoff evaluation runs in parallel.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSimulationCount` if `n_simulations` is 0
    /// or greater than 100,000.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_simulations == 0 || self.n_simulations > MAX_SIMULATIONS {
            return Err(ConfigError::InvalidSimulationCount(self.n_simulations));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_simulations: DEFAULT_SIMULATIONS,
            seed: None,
            cost_basis: CostBasis::default(),
            parallel: false,
        }
    }
}

/// Builder for [`SimulationConfig`].
///
/// Provides a fluent API with validation at build time. Unset fields take
/// the defaults of [`SimulationConfig::default`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{ConfigError, SimulationConfig};
///
/// let config = SimulationConfig::builder().build().unwrap();
/// assert_eq!(config.n_simulations(), 10_000);
///
/// let err = SimulationConfig::builder().n_simulations(0).build().unwrap_err();
/// assert_eq!(err, ConfigError::InvalidSimulationCount(0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_simulations: Option<usize>,
    seed: Option<u64>,
    cost_basis: CostBasis,
    parallel: bool,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulations.
    ///
    /// # Arguments
    ///
    /// * `n_simulations` - Number of samples in [1, 100_000]
    #[inline]
    pub fn n_simulations(mut self, n_simulations: usize) -> Self {
        self.n_simulations = Some(n_simulations);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the cost basis for options.
    #[inline]
    pub fn cost_basis(mut self, cost_basis: CostBasis) -> Self {
        self.cost_basis = cost_basis;
        self
    }

    /// Enables or disables parallel payoff evaluation.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_simulations` is out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            n_simulations: self.n_simulations.unwrap_or(DEFAULT_SIMULATIONS),
            seed: self.seed,
            cost_basis: self.cost_basis,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = SimulationConfig::builder().build().unwrap();

        assert_eq!(config.n_simulations(), DEFAULT_SIMULATIONS);
        assert_eq!(config.seed(), None);
        assert_eq!(config.cost_basis(), CostBasis::Snapshot);
        assert!(!config.parallel());
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = SimulationConfig::builder()
            .n_simulations(1000)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.seed(), Some(42));
        let cleared = SimulationConfig::builder()
            .seed(42)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(cleared.seed(), None);
    }

    #[test]
    fn test_config_bounds_inclusive() {
        assert!(SimulationConfig::builder().n_simulations(1).build().is_ok());
        assert!(SimulationConfig::builder()
            .n_simulations(MAX_SIMULATIONS)
            .build()
            .is_ok());
    }

    #[test]
    fn test_config_invalid_zero_simulations() {
        let result = SimulationConfig::builder().n_simulations(0).build();

        assert!(matches!(result, Err(ConfigError::InvalidSimulationCount(0))));
    }

    #[test]
    fn test_config_invalid_too_many_simulations() {
        let result = SimulationConfig::builder()
            .n_simulations(MAX_SIMULATIONS + 1)
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidSimulationCount(_))
        ));
    }

    #[test]
    fn test_cost_basis_parse() {
        assert_eq!("Market".parse::<CostBasis>().unwrap(), CostBasis::Market);
        assert_eq!(
            "snapshot".parse::<CostBasis>().unwrap(),
            CostBasis::Snapshot
        );
        assert!(matches!(
            "stale".parse::<CostBasis>(),
            Err(ConfigError::InvalidParameter {
                name: "cost_basis",
                ..
            })
        ));
        assert_eq!(CostBasis::Market.to_string(), "market");
    }
}

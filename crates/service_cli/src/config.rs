//! Analyser configuration.
//!
//! Defaults for the market scenario, the simulation and the payoff diagram
//! are read from an optional TOML file (`analyzer.toml`), then overridden by
//! `ANALYZER_*` environment variables, then by command-line flags.

use pricer_pricing::mc::{CostBasis, DEFAULT_SIMULATIONS, MAX_SIMULATIONS};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Market scenario defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketSection {
    /// Current underlying price
    pub spot: f64,
    /// Expected annual drift of the underlying
    pub drift: f64,
    /// Annual volatility
    pub volatility: f64,
    /// Simulation horizon in years
    pub horizon: f64,
    /// Risk-free rate
    pub rate: f64,
}

impl Default for MarketSection {
    fn default() -> Self {
        Self {
            spot: 100.0,
            drift: 0.05,
            volatility: 0.20,
            horizon: 1.0,
            rate: 0.05,
        }
    }
}

/// Simulation defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    /// Number of Monte Carlo scenarios
    pub num_simulations: usize,
    /// Fixed seed; absent means a fresh seed per run
    pub seed: Option<u64>,
    /// How option positions are costed
    pub cost_basis: CostBasis,
    /// Histogram bin count
    pub bins: usize,
    /// Evaluate payoffs on the rayon pool
    pub parallel: bool,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_SIMULATIONS,
            seed: None,
            cost_basis: CostBasis::default(),
            bins: 20,
            parallel: false,
        }
    }
}

/// Payoff diagram defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DiagramSection {
    /// Lowest spot on the grid
    pub lower: f64,
    /// Highest spot on the grid
    pub upper: f64,
    /// Number of grid points, endpoints included
    pub points: usize,
}

impl Default for DiagramSection {
    fn default() -> Self {
        Self {
            lower: 90.0,
            upper: 110.0,
            points: 21,
        }
    }
}

/// Analyser configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyzerConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Market scenario defaults
    #[serde(default)]
    pub market: MarketSection,

    /// Simulation defaults
    #[serde(default)]
    pub simulation: SimulationSection,

    /// Payoff diagram defaults
    #[serde(default)]
    pub diagram: DiagramSection,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            market: MarketSection::default(),
            simulation: SimulationSection::default(),
            diagram: DiagramSection::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise return the defaults.
    ///
    /// A file that exists but does not parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `ANALYZER_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Recognised keys: `ANALYZER_LOG_LEVEL`, `ANALYZER_NUM_SIMULATIONS`,
    /// `ANALYZER_SEED`. Values that do not parse are reported together.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut errors = Vec::new();

        if let Some(log_level) = lookup("ANALYZER_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(raw) = lookup("ANALYZER_NUM_SIMULATIONS") {
            match raw.trim().parse() {
                Ok(n) => self.simulation.num_simulations = n,
                Err(_) => errors.push(format!(
                    "ANALYZER_NUM_SIMULATIONS '{}' is not a non-negative integer",
                    raw
                )),
            }
        }

        if let Some(raw) = lookup("ANALYZER_SEED") {
            match raw.trim().parse() {
                Ok(seed) => self.simulation.seed = Some(seed),
                Err(_) => errors.push(format!("ANALYZER_SEED '{}' is not a u64", raw)),
            }
        }

        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        let market = &self.market;
        if !(market.spot.is_finite() && market.spot > 0.0) {
            errors.push(format!("market.spot must be positive, got {}", market.spot));
        }
        if !market.drift.is_finite() {
            errors.push(format!("market.drift must be finite, got {}", market.drift));
        }
        if !(market.volatility.is_finite() && market.volatility > 0.0) {
            errors.push(format!(
                "market.volatility must be positive, got {}",
                market.volatility
            ));
        }
        if !(market.horizon.is_finite() && market.horizon >= 0.0) {
            errors.push(format!(
                "market.horizon must be non-negative, got {}",
                market.horizon
            ));
        }
        if !market.rate.is_finite() {
            errors.push(format!("market.rate must be finite, got {}", market.rate));
        }

        let n = self.simulation.num_simulations;
        if !(1..=MAX_SIMULATIONS).contains(&n) {
            errors.push(format!(
                "simulation.num_simulations must be in [1, {}], got {}",
                MAX_SIMULATIONS, n
            ));
        }
        if self.simulation.bins == 0 {
            errors.push("simulation.bins must be at least 1".to_string());
        }

        let diagram = &self.diagram;
        if !(diagram.lower >= 0.0 && diagram.lower < diagram.upper && diagram.upper.is_finite()) {
            errors.push(format!(
                "diagram range [{}, {}] must satisfy 0 <= lower < upper",
                diagram.lower, diagram.upper
            ));
        }
        if diagram.points < 2 {
            errors.push(format!(
                "diagram.points must be at least 2, got {}",
                diagram.points
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("IO error: {0}")]
    Io(String),
    /// File is not valid TOML for this schema
    #[error("Parse error: {0}")]
    Parse(String),
    /// One or more values are out of range
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

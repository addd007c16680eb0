//! Monte Carlo simulation building blocks.
//!
//! # Architecture
//!
//! ```text
//! SimulationConfig  (simulation count, seed, cost basis, parallelism)
//! PricerRng         (random number generation, seed reporting)
//! simulate_terminal_prices()
//!     └── GbmParams::terminal_price() per standard normal draw
//! ```
//!
//! The PnL engine in `pricer_risk` combines these with portfolio
//! aggregation.
//!
//! # Examples
//!
//! ```rust
//! use pricer_pricing::mc::{simulate_terminal_prices, SimulationConfig};
//! use pricer_pricing::rng::PricerRng;
//!
//! let config = SimulationConfig::builder()
//!     .n_simulations(2_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let mut rng = PricerRng::from_optional_seed(config.seed());
//! let prices = simulate_terminal_prices(100.0, 0.05, 0.2, 1.0, config.n_simulations(), &mut rng);
//! assert_eq!(prices.len(), 2_000);
//! ```

mod config;
mod error;
mod terminal;

pub use config::{
    CostBasis, SimulationConfig, SimulationConfigBuilder, DEFAULT_SIMULATIONS, MAX_SIMULATIONS,
};
pub use error::ConfigError;
pub use terminal::simulate_terminal_prices;

//! # Pricer Simulation (Layer 3)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns model parameters into random samples:
//! - Seeded, reproducible random number generation ([`rng::PricerRng`])
//! - Simulation configuration with validated bounds ([`mc::SimulationConfig`])
//! - Exact GBM terminal-price sampling ([`mc::simulate_terminal_prices`])
//!
//! Portfolio aggregation and PnL statistics live one layer up in
//! `pricer_risk`.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::mc::simulate_terminal_prices;
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(42);
//! let prices = simulate_terminal_prices(100.0, 0.05, 0.2, 1.0, 1_000, &mut rng);
//!
//! assert_eq!(prices.len(), 1_000);
//! assert!(prices.iter().all(|&p| p > 0.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for `SimulationConfig` and `CostBasis`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;

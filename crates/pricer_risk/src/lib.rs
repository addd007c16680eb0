//! # Pricer Risk (L4: Application)
//!
//! Portfolio aggregation, payoff diagrams and Monte Carlo PnL distributions.
//!
//! This crate provides:
//! - [`portfolio::Portfolio`]: ordered, heterogeneous instrument collection
//! - Payoff and cost aggregation, with a choice of option cost basis
//! - [`portfolio::PayoffDiagram`]: payoff over an evenly spaced spot grid
//! - [`pnl::PnlEngine`]: GBM terminal-price simulation and PnL statistics
//! - Rayon-based parallel payoff evaluation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  portfolio/  - Portfolio, aggregation,  │
//! │               payoff diagram            │
//! │  pnl/        - engine, statistics,      │
//! │               histogram, result         │
//! │  parallel/   - Rayon settings           │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_pricing (L3)           │
//! │  RNG, simulation config, GBM sampling   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_models::instruments::{Debt, EuropeanOption, OptionKind};
//! use pricer_pricing::mc::SimulationConfig;
//! use pricer_risk::pnl::{PnlEngine, SimulationScenario};
//! use pricer_risk::portfolio::Portfolio;
//!
//! let mut portfolio = Portfolio::new();
//! portfolio.push(Debt::new(-10.0).unwrap());
//! portfolio.push(EuropeanOption::builder(OptionKind::Put, 30.0).build().unwrap());
//! portfolio.push(
//!     EuropeanOption::builder(OptionKind::Call, 30.0)
//!         .quantity(-1.0)
//!         .build()
//!         .unwrap(),
//! );
//!
//! let config = SimulationConfig::builder()
//!     .n_simulations(10_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let scenario = SimulationScenario::new(30.0, 0.05, 0.2, 1.0, 0.12).unwrap();
//!
//! let result = PnlEngine::new(config).run(&portfolio, &scenario).unwrap();
//! let stats = result.statistics();
//! assert!(stats.percentile_5 <= stats.percentile_95);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for portfolios, diagrams and simulation results

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod parallel;
pub mod pnl;
pub mod portfolio;

pub use pnl::{simulate_portfolio_pnl, PnlError};

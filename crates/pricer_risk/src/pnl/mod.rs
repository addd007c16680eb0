//! Monte Carlo PnL simulation.
//!
//! - [`engine`]: scenario validation and the simulation pipeline
//! - [`statistics`]: moments, percentiles and histogram of a PnL sample
//! - [`result`]: the immutable [`SimulationResult`] record
//!
//! Pricing for the initial cost is risk-neutral at the scenario rate, while
//! terminal prices follow the real-world drift. PnL compares payoff with the
//! cost compounded to the same horizon.

pub mod engine;
mod error;
pub mod result;
pub mod statistics;

pub use engine::{simulate_portfolio_pnl, PnlEngine, SimulationScenario};
pub use error::PnlError;
pub use result::SimulationResult;
pub use statistics::{percentile, Histogram, PnlStatistics};

//! Stochastic price models.
//!
//! - [`GbmParams`]: Geometric Brownian Motion under the real-world measure,
//!   mapped to terminal prices with the exact log-normal solution
//!
//! ## Example
//!
//! ```
//! use pricer_models::models::GbmParams;
//!
//! let gbm = GbmParams::new(100.0_f64, 0.05, 0.2).unwrap();
//! let prices = gbm.terminal_prices(1.0, &[-1.0, 0.0, 1.0]);
//! assert_eq!(prices.len(), 3);
//! assert!(prices[0] < prices[1] && prices[1] < prices[2]);
//! ```

pub mod gbm;

pub use gbm::GbmParams;

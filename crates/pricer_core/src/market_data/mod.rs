//! Market data structures for valuation.
//!
//! # Components
//!
//! - [`MarketContext`]: spot, continuously compounded risk-free rate and time to
//!   maturity supplied by the caller for a single valuation or simulation call
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::MarketContext;
//!
//! let market = MarketContext::new(100.0_f64, 0.05, 2.0).unwrap();
//! assert_eq!(market.spot(), 100.0);
//! assert!((market.growth_factor() * market.discount_factor() - 1.0).abs() < 1e-12);
//! ```

mod context;

pub use context::MarketContext;

//! # pricer_core: Foundation Layer for Portfolio Analysis
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the pricer stack, providing:
//! - Error types: `PricingError` (`types::error`)
//! - Market context: `MarketContext` (`market_data`)
//! - Capability traits shared by every instrument: `Payoff`, `Priceable` (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::MarketContext;
//!
//! let market = MarketContext::new(100.0_f64, 0.05, 1.0).unwrap();
//! let df = market.discount_factor();
//! assert!((df - (-0.05_f64).exp()).abs() < 1e-12);
//! assert!((market.forward_price() - 100.0 * 0.05_f64.exp()).abs() < 1e-10);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `MarketContext`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod traits;
pub mod types;

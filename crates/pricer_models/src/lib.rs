//! # Pricer Models (L2: Business Logic)
//!
//! Financial instruments, closed-form pricing and the GBM price map.
//!
//! This crate provides:
//! - Instrument value objects (European options, debt, forwards) behind the
//!   [`instruments::Instrument`] enum
//! - Standard normal distribution functions and the Black-Scholes formula
//! - The exact GBM terminal-price solution used by the simulation layer
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch through the `Payoff` and
//!   `Priceable` traits of `pricer_core`
//! - **Validated construction**: every constructor returns `Result` and never
//!   yields a partially valid instrument
//! - **Builder pattern** for options, with the analyser's default market snapshot

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;

//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Standard normal CDF/PDF used by the formula
//!
//! All functions are generic over `T: Float`.

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};

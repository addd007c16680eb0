//! # Random Number Generation Infrastructure
//!
//! Random number generation for Monte Carlo simulation.
//!
//! - **Reproducibility**: A seeded generator always yields the same sequence
//! - **Traceability**: An unseeded generator draws its seed from entropy and
//!   still reports it, so any run can be replayed
//! - **Efficiency**: Zero-allocation batch operations via `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut normals = vec![0.0; 4];
//! rng.fill_normal(&mut normals);
//!
//! let mut replay = PricerRng::from_seed(rng.seed());
//! assert_eq!(replay.gen_normal(), normals[0]);
//! ```

pub mod prng;

pub use prng::PricerRng;

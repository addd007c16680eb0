//! Geometric Brownian Motion (GBM) model implementation.
//!
//! GBM is the fundamental model for asset price dynamics, described by:
//! ```text
//! dS = μ * S * dt + σ * S * dW
//! ```
//! where:
//! - S = asset price
//! - μ = drift (real-world expected growth, not the risk-free rate)
//! - σ = volatility
//! - dW = Wiener process increment
//!
//! ## Terminal-price formulation
//!
//! Only the terminal distribution is needed, so the exact solution is used
//! in a single step:
//! ```text
//! S(T) = S(0) * exp((μ - 0.5*σ²)*T + σ*sqrt(T)*ε),   ε ~ N(0, 1)
//! ```
//! There is no discretisation bias and the cost is O(1) per sample.
//!
//! Extreme parameter combinations may overflow to `+inf`; the value is
//! returned as-is.

use num_traits::Float;

use crate::instruments::ValidationError;

/// GBM model parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams<T: Float> {
    spot: T,
    drift: T,
    volatility: T,
}

impl<T: Float> GbmParams<T> {
    /// Create new GBM parameters with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial spot price (must be positive)
    /// * `drift` - Expected growth rate (must be finite)
    /// * `volatility` - Volatility (must be positive)
    pub fn new(spot: T, drift: T, volatility: T) -> Result<Self, ValidationError> {
        ValidationError::check_spot(spot)?;
        ValidationError::check_finite("drift", drift)?;
        ValidationError::check_volatility(volatility)?;
        Ok(Self::from_parts(spot, drift, volatility))
    }

    /// Create parameters without validation.
    ///
    /// For callers that have already checked their inputs; a non-positive
    /// volatility simply yields a deterministic or mirrored path.
    #[inline]
    pub fn from_parts(spot: T, drift: T, volatility: T) -> Self {
        Self {
            spot,
            drift,
            volatility,
        }
    }

    /// Initial spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Drift.
    #[inline]
    pub fn drift(&self) -> T {
        self.drift
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Terminal price after `horizon` years for one standard normal draw.
    ///
    /// At `horizon = 0` the exponent is exactly zero and the spot is
    /// returned unchanged, whatever `z` is.
    #[inline]
    pub fn terminal_price(&self, horizon: T, z: T) -> T {
        let (drift_term, diffusion) = self.exponent_terms(horizon);
        self.spot * (drift_term + diffusion * z).exp()
    }

    /// Terminal prices for a slice of standard normal draws.
    pub fn terminal_prices(&self, horizon: T, normals: &[T]) -> Vec<T> {
        let (drift_term, diffusion) = self.exponent_terms(horizon);
        normals
            .iter()
            .map(|&z| self.spot * (drift_term + diffusion * z).exp())
            .collect()
    }

    /// (μ − σ²/2)·T and σ·√T.
    #[inline]
    fn exponent_terms(&self, horizon: T) -> (T, T) {
        let half = T::from(0.5).unwrap_or_else(T::nan);
        let drift_term = (self.drift - half * self.volatility * self.volatility) * horizon;
        let diffusion = self.volatility * horizon.sqrt();
        (drift_term, diffusion)
    }
}

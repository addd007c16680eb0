//! Terminal-price sampling under GBM.

use pricer_models::models::GbmParams;

use crate::rng::PricerRng;

/// Draws `n_simulations` independent terminal prices.
///
/// Each sample is `S·exp((μ − σ²/2)·T + σ·ε·√T)` with a fresh standard
/// normal `ε`. Inputs are not validated; a `horizon` of zero returns
/// `spot` for every sample.
///
/// # Arguments
///
/// * `spot` - Initial price
/// * `drift` - Real-world expected growth rate μ
/// * `volatility` - Volatility σ
/// * `horizon` - Time to the terminal date in years
/// * `n_simulations` - Number of samples
/// * `rng` - Source of normal variates
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::simulate_terminal_prices;
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(1);
/// let prices = simulate_terminal_prices(100.0, 0.05, 0.3, 0.0, 5, &mut rng);
/// assert_eq!(prices, vec![100.0; 5]);
/// ```
pub fn simulate_terminal_prices(
    spot: f64,
    drift: f64,
    volatility: f64,
    horizon: f64,
    n_simulations: usize,
    rng: &mut PricerRng,
) -> Vec<f64> {
    let gbm = GbmParams::from_parts(spot, drift, volatility);

    let mut samples = vec![0.0; n_simulations];
    rng.fill_normal(&mut samples);
    for value in samples.iter_mut() {
        *value = gbm.terminal_price(horizon, *value);
    }
    samples
}

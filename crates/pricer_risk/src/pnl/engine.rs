//! Monte Carlo PnL engine.
//!
//! # Algorithm
//!
//! ```text
//! 1. initial cost   = Σ price(instrument)                 (risk-neutral, rate r)
//! 2. terminal price = S·exp((μ − σ²/2)T + σ√T·ε)           (real-world drift μ)
//! 3. payoff         = Σ payoff(instrument, terminal price)
//! 4. future cost    = initial cost · exp(rT)
//! 5. PnL            = payoff − future cost
//! ```
//!
//! The engine only reads the portfolio; instruments are never modified.

use pricer_core::market_data::MarketContext;
use pricer_pricing::mc::{simulate_terminal_prices, ConfigError, CostBasis, SimulationConfig};
use pricer_pricing::rng::PricerRng;
use tracing::{debug, warn};

use super::{PnlError, PnlStatistics, SimulationResult};
use crate::portfolio::{aggregate_cost, aggregate_payoff, aggregate_payoff_parallel, Portfolio};

/// Relative tolerance for an option snapshot to count as matching the
/// scenario.
const SNAPSHOT_TOLERANCE: f64 = 1e-9;

/// Market scenario for one PnL simulation.
///
/// # Examples
///
/// ```
/// use pricer_risk::pnl::SimulationScenario;
///
/// let scenario = SimulationScenario::new(100.0, 0.05, 0.2, 1.0, 0.03).unwrap();
/// assert_eq!(scenario.expected_drift(), 0.05);
///
/// assert!(SimulationScenario::new(100.0, 0.05, 0.0, 1.0, 0.03).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationScenario {
    spot: f64,
    expected_drift: f64,
    volatility: f64,
    maturity: f64,
    rate: f64,
}

impl SimulationScenario {
    /// Creates a validated scenario.
    ///
    /// # Arguments
    ///
    /// * `spot` - Current price of the underlying (must be positive)
    /// * `expected_drift` - Real-world growth rate μ (must be finite)
    /// * `volatility` - Volatility σ (must be positive)
    /// * `maturity` - Horizon in years (must be non-negative)
    /// * `rate` - Risk-free rate (must be finite)
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidParameter` naming the first offending input.
    pub fn new(
        spot: f64,
        expected_drift: f64,
        volatility: f64,
        maturity: f64,
        rate: f64,
    ) -> Result<Self, ConfigError> {
        check(spot > 0.0 && spot.is_finite(), "spot", spot, "must be positive")?;
        check(expected_drift.is_finite(), "expected_drift", expected_drift, "must be finite")?;
        check(
            volatility > 0.0 && volatility.is_finite(),
            "volatility",
            volatility,
            "must be positive",
        )?;
        check(
            maturity >= 0.0 && maturity.is_finite(),
            "maturity",
            maturity,
            "must be non-negative",
        )?;
        check(rate.is_finite(), "rate", rate, "must be finite")?;

        Ok(Self {
            spot,
            expected_drift,
            volatility,
            maturity,
            rate,
        })
    }

    /// Spot price of the underlying.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Real-world drift driving the simulation.
    #[inline]
    pub fn expected_drift(&self) -> f64 {
        self.expected_drift
    }

    /// Volatility driving the simulation.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Horizon in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Risk-free rate for pricing and compounding.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Pricing context at the scenario's spot, rate and maturity.
    pub fn market(&self) -> Result<MarketContext<f64>, PnlError> {
        Ok(MarketContext::new(self.spot, self.rate, self.maturity)?)
    }
}

fn check(ok: bool, name: &'static str, value: f64, rule: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value: format!("{}, {}", value, rule),
        })
    }
}

/// Monte Carlo PnL engine.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::Forward;
/// use pricer_pricing::mc::SimulationConfig;
/// use pricer_risk::pnl::{PnlEngine, SimulationScenario};
/// use pricer_risk::portfolio::Portfolio;
///
/// let mut portfolio = Portfolio::new();
/// portfolio.push(Forward::new(100.0, 1.0).unwrap());
///
/// let config = SimulationConfig::builder()
///     .n_simulations(5_000)
///     .seed(7)
///     .build()
///     .unwrap();
/// let scenario = SimulationScenario::new(100.0, 0.05, 0.2, 1.0, 0.03).unwrap();
///
/// let result = PnlEngine::new(config).run(&portfolio, &scenario).unwrap();
/// assert_eq!(result.len(), 5_000);
/// assert_eq!(result.seed(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PnlEngine {
    config: SimulationConfig,
}

impl PnlEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs one simulation, seeding from the configuration or from entropy.
    pub fn run(
        &self,
        portfolio: &Portfolio<f64>,
        scenario: &SimulationScenario,
    ) -> Result<SimulationResult, PnlError> {
        let mut rng = PricerRng::from_optional_seed(self.config.seed());
        self.run_with_rng(portfolio, scenario, &mut rng)
    }

    /// Runs one simulation drawing from `rng`.
    ///
    /// The configured seed is ignored; the result reports `rng.seed()`.
    pub fn run_with_rng(
        &self,
        portfolio: &Portfolio<f64>,
        scenario: &SimulationScenario,
        rng: &mut PricerRng,
    ) -> Result<SimulationResult, PnlError> {
        self.config.validate()?;
        let n_simulations = self.config.n_simulations();
        let cost_basis = self.config.cost_basis();
        let market = scenario.market()?;

        debug!(
            instruments = portfolio.len(),
            n_simulations,
            seed = rng.seed(),
            cost_basis = %cost_basis,
            "starting PnL simulation"
        );

        if cost_basis == CostBasis::Snapshot {
            let stale = portfolio
                .iter()
                .filter_map(|instrument| instrument.as_option())
                .filter(|option| !option.snapshot_matches(&market, SNAPSHOT_TOLERANCE))
                .count();
            if stale > 0 {
                warn!(
                    stale_options = stale,
                    spot = scenario.spot(),
                    rate = scenario.rate(),
                    maturity = scenario.maturity(),
                    "option market snapshots differ from the simulation scenario; \
                     their cost uses the stored snapshot"
                );
            }
        }

        let initial_cost = aggregate_cost(portfolio, &market, cost_basis);

        let terminal_prices = simulate_terminal_prices(
            scenario.spot(),
            scenario.expected_drift(),
            scenario.volatility(),
            scenario.maturity(),
            n_simulations,
            rng,
        );

        let payoffs = if self.config.parallel() {
            aggregate_payoff_parallel(portfolio, &terminal_prices)
        } else {
            aggregate_payoff(portfolio, &terminal_prices)
        };

        let future_cost = initial_cost * market.growth_factor();
        let pnl_samples: Vec<f64> = payoffs.into_iter().map(|p| p - future_cost).collect();
        let statistics = PnlStatistics::from_samples(&pnl_samples)?;

        debug!(
            initial_cost,
            future_cost,
            mean = statistics.mean,
            std = statistics.std,
            "PnL simulation finished"
        );

        Ok(SimulationResult::new(
            initial_cost,
            future_cost,
            rng.seed(),
            statistics,
            pnl_samples,
            terminal_prices,
        ))
    }
}

/// Simulates the PnL distribution of `portfolio` with default settings.
///
/// Options are costed on their own snapshots and the random stream is seeded
/// from entropy, so successive calls are independent. Use [`PnlEngine`] for
/// a fixed seed or a different cost basis.
///
/// # Errors
///
/// - `PnlError::Config` for an out-of-range scenario input or simulation count
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::Debt;
/// use pricer_risk::pnl::simulate_portfolio_pnl;
/// use pricer_risk::portfolio::Portfolio;
///
/// let mut portfolio = Portfolio::new();
/// portfolio.push(Debt::new(100.0).unwrap());
///
/// let result = simulate_portfolio_pnl(&portfolio, 100.0, 0.05, 0.2, 1.0, 0.03, 1_000).unwrap();
/// assert_eq!(result.pnl_samples().len(), 1_000);
/// assert!(result.mean().abs() < 1e-9);
/// ```
pub fn simulate_portfolio_pnl(
    portfolio: &Portfolio<f64>,
    spot: f64,
    expected_drift: f64,
    volatility: f64,
    maturity: f64,
    rfr: f64,
    n_simulations: usize,
) -> Result<SimulationResult, PnlError> {
    let config = SimulationConfig::builder()
        .n_simulations(n_simulations)
        .build()?;
    let scenario = SimulationScenario::new(spot, expected_drift, volatility, maturity, rfr)?;
    PnlEngine::new(config).run(portfolio, &scenario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::instruments::{Debt, EuropeanOption, Forward, Instrument, OptionKind};

    fn engine(n: usize, seed: u64) -> PnlEngine {
        PnlEngine::new(
            SimulationConfig::builder()
                .n_simulations(n)
                .seed(seed)
                .build()
                .unwrap(),
        )
    }

    fn scenario() -> SimulationScenario {
        SimulationScenario::new(100.0, 0.05, 0.2, 1.0, 0.03).unwrap()
    }

    fn mixed_book() -> Portfolio<f64> {
        let parts: Vec<Instrument<f64>> = vec![
            EuropeanOption::builder(OptionKind::Call, 105.0)
                .build()
                .unwrap()
                .into(),
            Forward::new(100.0, -1.0).unwrap().into(),
            Debt::new(50.0).unwrap().into(),
        ];
        Portfolio::from(parts)
    }

    #[test]
    fn test_scenario_validation_names_field() {
        let cases = [
            (SimulationScenario::new(0.0, 0.05, 0.2, 1.0, 0.03), "spot"),
            (
                SimulationScenario::new(100.0, f64::NAN, 0.2, 1.0, 0.03),
                "expected_drift",
            ),
            (SimulationScenario::new(100.0, 0.05, -0.2, 1.0, 0.03), "volatility"),
            (SimulationScenario::new(100.0, 0.05, 0.2, -1.0, 0.03), "maturity"),
            (
                SimulationScenario::new(100.0, 0.05, 0.2, 1.0, f64::INFINITY),
                "rate",
            ),
        ];
        for (result, field) in cases {
            match result {
                Err(ConfigError::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("expected invalid {}, got {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_result_lengths() {
        let result = engine(1_234, 1).run(&mixed_book(), &scenario()).unwrap();
        assert_eq!(result.len(), 1_234);
        assert_eq!(result.pnl_samples().len(), 1_234);
        assert_eq!(result.terminal_prices().len(), 1_234);
    }

    #[test]
    fn test_pnl_is_payoff_minus_future_cost() {
        let book = mixed_book();
        let result = engine(100, 2).run(&book, &scenario()).unwrap();
        let payoffs = aggregate_payoff(&book, result.terminal_prices());

        assert_relative_eq!(
            result.future_cost(),
            result.initial_cost() * 0.03_f64.exp(),
            epsilon = 1e-12
        );
        for (pnl, payoff) in result.pnl_samples().iter().zip(payoffs) {
            assert_relative_eq!(*pnl, payoff - result.future_cost(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let a = engine(500, 99).run(&mixed_book(), &scenario()).unwrap();
        let b = engine(500, 99).run(&mixed_book(), &scenario()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseeded_run_reports_replayable_seed() {
        let config = SimulationConfig::builder().n_simulations(200).build().unwrap();
        let first = PnlEngine::new(config).run(&mixed_book(), &scenario()).unwrap();
        let replay = engine(200, first.seed())
            .run(&mixed_book(), &scenario())
            .unwrap();
        assert_eq!(first.pnl_samples(), replay.pnl_samples());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = |parallel| {
            SimulationConfig::builder()
                .n_simulations(20_000)
                .seed(5)
                .parallel(parallel)
                .build()
                .unwrap()
        };
        let seq = PnlEngine::new(config(false))
            .run(&mixed_book(), &scenario())
            .unwrap();
        let par = PnlEngine::new(config(true))
            .run(&mixed_book(), &scenario())
            .unwrap();
        assert_eq!(seq.pnl_samples(), par.pnl_samples());
    }

    #[test]
    fn test_zero_horizon() {
        let scenario = SimulationScenario::new(100.0, 0.05, 0.2, 0.0, 0.03).unwrap();
        let result = engine(50, 3).run(&mixed_book(), &scenario).unwrap();
        assert!(result.terminal_prices().iter().all(|&p| p == 100.0));
        assert_relative_eq!(result.statistics().std, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_debt_only_pnl_is_zero() {
        let mut book = Portfolio::new();
        book.push(Debt::new(100.0).unwrap());
        let result = engine(1_000, 4).run(&book, &scenario()).unwrap();
        assert_relative_eq!(result.mean(), 0.0, epsilon = 1e-10);
        assert_eq!(result.statistics().skew, 0.0);
    }

    #[test]
    fn test_cost_basis_changes_initial_cost_only_for_options() {
        let market_engine = PnlEngine::new(
            SimulationConfig::builder()
                .n_simulations(100)
                .seed(8)
                .cost_basis(CostBasis::Market)
                .build()
                .unwrap(),
        );
        let snapshot = engine(100, 8).run(&mixed_book(), &scenario()).unwrap();
        let market = market_engine.run(&mixed_book(), &scenario()).unwrap();

        assert_ne!(snapshot.initial_cost(), market.initial_cost());
        assert_eq!(snapshot.terminal_prices(), market.terminal_prices());

        let mut no_options = Portfolio::new();
        no_options.push(Forward::new(100.0, 1.0).unwrap());
        let a = engine(100, 8).run(&no_options, &scenario()).unwrap();
        let b = market_engine.run(&no_options, &scenario()).unwrap();
        assert_eq!(a.initial_cost(), b.initial_cost());
    }

    #[test]
    fn test_empty_portfolio() {
        let book: Portfolio<f64> = Portfolio::new();
        let result = engine(10, 0).run(&book, &scenario()).unwrap();
        assert_eq!(result.initial_cost(), 0.0);
        assert!(result.pnl_samples().iter().all(|&p| p == 0.0));
    }

    #[test]
    fn test_free_function_validates_count() {
        let err = simulate_portfolio_pnl(&mixed_book(), 100.0, 0.05, 0.2, 1.0, 0.03, 0).unwrap_err();
        assert_eq!(
            err,
            PnlError::Config(ConfigError::InvalidSimulationCount(0))
        );
        let err = simulate_portfolio_pnl(&mixed_book(), 100.0, 0.05, 0.2, 1.0, 0.03, 100_001)
            .unwrap_err();
        assert!(matches!(
            err,
            PnlError::Config(ConfigError::InvalidSimulationCount(100_001))
        ));
    }
}

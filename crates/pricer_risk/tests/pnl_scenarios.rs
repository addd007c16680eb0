//! End-to-end PnL scenarios.
//!
//! # Test Categories
//!
//! 1. **Reference book**: payoff of a debt-financed collar at known spots
//! 2. **Shape guarantees**: sample lengths and zero-horizon behaviour
//! 3. **Convergence**: forward PnL mean against its closed-form expectation

use approx::assert_relative_eq;
use pricer_core::market_data::MarketContext;
use pricer_core::traits::Payoff;
use pricer_models::instruments::{Debt, EuropeanOption, Forward, Instrument, OptionKind};
use pricer_pricing::mc::{CostBasis, SimulationConfig};
use pricer_risk::pnl::{simulate_portfolio_pnl, PnlEngine, SimulationScenario};
use pricer_risk::portfolio::{aggregate_payoff, aggregate_initial_cost, PayoffDiagram, Portfolio};

fn option(kind: OptionKind, strike: f64, quantity: f64) -> Instrument<f64> {
    EuropeanOption::builder(kind, strike)
        .quantity(quantity)
        .build()
        .unwrap()
        .into()
}

/// Debt(−10), long put 30, short call 30, short call 20.
fn reference_book() -> Portfolio<f64> {
    let parts = vec![
        Debt::new(-10.0).unwrap().into(),
        option(OptionKind::Put, 30.0, 1.0),
        option(OptionKind::Call, 30.0, -1.0),
        option(OptionKind::Call, 20.0, -1.0),
    ];
    Portfolio::from(parts)
}

fn seeded(n: usize, seed: u64) -> PnlEngine {
    PnlEngine::new(
        SimulationConfig::builder()
            .n_simulations(n)
            .seed(seed)
            .build()
            .unwrap(),
    )
}

// ============================================================================
// Reference book
// ============================================================================

#[test]
fn test_reference_book_payoff_at_20_and_50() {
    let payoff = aggregate_payoff(&reference_book(), &[20.0, 50.0]);
    assert_eq!(payoff[0], 0.0);
    assert_eq!(payoff[1], -60.0);
}

#[test]
fn test_reference_book_diagram_matches_aggregate() {
    let book = reference_book();
    let diagram = PayoffDiagram::over_range(&book, 10.0, 60.0, 51).unwrap();
    assert_eq!(diagram.total(), aggregate_payoff(&book, diagram.spots()).as_slice());
}

// ============================================================================
// Instrument guarantees
// ============================================================================

#[test]
fn test_expired_at_the_money_call_is_worthless() {
    let call = EuropeanOption::builder(OptionKind::Call, 100.0_f64)
        .spot(100.0)
        .maturity(0.0)
        .build()
        .unwrap();
    assert_eq!(call.price(), 0.0);
    assert_eq!(call.payoff(100.0), 0.0);
}

#[test]
fn test_put_call_parity_across_strikes() {
    for strike in [60.0, 90.0, 100.0, 110.0, 150.0] {
        let call = EuropeanOption::builder(OptionKind::Call, strike)
            .rate(0.04)
            .maturity(2.0)
            .build()
            .unwrap();
        let put = EuropeanOption::builder(OptionKind::Put, strike)
            .rate(0.04)
            .maturity(2.0)
            .build()
            .unwrap();
        let parity = 100.0 - strike * (-0.08_f64).exp();
        assert_relative_eq!(call.price() - put.price(), parity, epsilon = 1e-6);
    }
}

#[test]
fn test_debt_and_forward_payoff_shapes() {
    let spots = [0.0, 50.0, 100.0, 150.0, 1e6];
    let debt = Debt::new(-25.0_f64).unwrap();
    assert!(debt.payoff_vec(&spots).iter().all(|&p| p == -25.0));

    let forward = Forward::new(100.0_f64, 3.0).unwrap();
    let payoffs = forward.payoff_vec(&spots);
    assert_eq!(payoffs[2], 0.0);
    for (p, s) in payoffs.iter().zip(spots.iter()) {
        assert_eq!(*p, 3.0 * (s - 100.0));
    }
}

// ============================================================================
// Shape guarantees
// ============================================================================

#[test]
fn test_sample_lengths_equal_simulation_count() {
    for n in [1, 1_000, 25_000] {
        let result = simulate_portfolio_pnl(&reference_book(), 30.0, 0.05, 0.25, 1.0, 0.12, n)
            .unwrap();
        assert_eq!(result.pnl_samples().len(), n);
        assert_eq!(result.terminal_prices().len(), n);
    }
}

#[test]
fn test_zero_horizon_terminal_prices_equal_spot() {
    let scenario = SimulationScenario::new(30.0, 0.4, 0.9, 0.0, 0.12).unwrap();
    let result = seeded(2_000, 17).run(&reference_book(), &scenario).unwrap();
    assert!(result.terminal_prices().iter().all(|&p| p == 30.0));
}

#[test]
fn test_initial_cost_uses_option_snapshots() {
    let book = reference_book();
    let scenario = SimulationScenario::new(30.0, 0.05, 0.2, 0.5, 0.02).unwrap();
    let result = seeded(100, 1).run(&book, &scenario).unwrap();

    let market = MarketContext::new(30.0, 0.02, 0.5).unwrap();
    assert_relative_eq!(
        result.initial_cost(),
        aggregate_initial_cost(&book, &market),
        epsilon = 1e-12
    );
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_forward_pnl_converges_to_expectation() {
    // E[PnL] = q·(S·e^{μT} − K) − q·(S − K·e^{−rT})·e^{rT} = q·S·(e^{μT} − e^{rT})
    let (spot, drift, vol, horizon, rate) = (100.0_f64, 0.08_f64, 0.25, 1.0_f64, 0.03_f64);
    let mut book = Portfolio::new();
    book.push(Forward::new(95.0, 2.0).unwrap());
    let expected = 2.0 * spot * ((drift * horizon).exp() - (rate * horizon).exp());

    let scenario = SimulationScenario::new(spot, drift, vol, horizon, rate).unwrap();
    let result = seeded(100_000, 2024).run(&book, &scenario).unwrap();

    let error = (result.mean() - expected).abs();
    assert!(
        error < 4.0 * result.standard_error(),
        "mean {} vs expected {} (se {})",
        result.mean(),
        expected,
        result.standard_error()
    );
}

#[test]
fn test_standard_error_shrinks_with_sample_size() {
    let mut book = Portfolio::new();
    book.push(Forward::new(100.0, 1.0).unwrap());
    let scenario = SimulationScenario::new(100.0, 0.05, 0.2, 1.0, 0.03).unwrap();

    let small = seeded(1_000, 3).run(&book, &scenario).unwrap();
    let large = seeded(100_000, 3).run(&book, &scenario).unwrap();

    // √(100 000 / 1 000) = 10
    let ratio = small.standard_error() / large.standard_error();
    assert!((7.0..13.0).contains(&ratio), "ratio = {}", ratio);
}

#[test]
fn test_market_cost_basis_removes_snapshot_divergence() {
    // Long call at the scenario market: expected PnL is the drift premium only
    let mut book = Portfolio::new();
    book.push(option(OptionKind::Call, 100.0, 1.0));

    let scenario = SimulationScenario::new(100.0, 0.03, 0.2, 1.0, 0.03).unwrap();
    let config = SimulationConfig::builder()
        .n_simulations(100_000)
        .seed(11)
        .cost_basis(CostBasis::Market)
        .build()
        .unwrap();
    let result = PnlEngine::new(config).run(&book, &scenario).unwrap();

    // Drift equals the rate: discounted expected payoff equals the price
    assert!(
        result.mean().abs() < 4.0 * result.standard_error(),
        "mean {} (se {})",
        result.mean(),
        result.standard_error()
    );
}

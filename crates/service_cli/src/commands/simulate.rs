//! Simulate command implementation
//!
//! Runs the Monte Carlo PnL engine and reports the distribution summary
//! with a text histogram.

use pricer_pricing::mc::{CostBasis, SimulationConfig};
use pricer_risk::pnl::{
    Histogram, PnlEngine, PnlError, PnlStatistics, SimulationResult, SimulationScenario,
};
use pricer_risk::portfolio::Portfolio;
use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

use crate::output::{fmt_value, render_table, write_json, OutputFormat};
use crate::Result;

/// Width of the longest histogram bar, in characters.
const BAR_WIDTH: usize = 40;

#[derive(Debug, Serialize)]
struct BinRow {
    lower: f64,
    upper: f64,
    count: usize,
}

#[derive(Debug, Serialize)]
struct SimulationReport<'a> {
    scenario: &'a SimulationScenario,
    n_simulations: usize,
    seed: u64,
    cost_basis: CostBasis,
    initial_cost: f64,
    future_cost: f64,
    standard_error: f64,
    statistics: &'a PnlStatistics,
    /// Empty when no PnL sample is finite
    histogram: Vec<BinRow>,
}

#[derive(Debug, Serialize)]
struct SampleRow {
    simulation: usize,
    terminal_price: f64,
    pnl: f64,
}

/// Run the simulate command.
///
/// Returns the engine result so callers can inspect the samples.
pub fn run<W: Write>(
    portfolio: &Portfolio<f64>,
    scenario: &SimulationScenario,
    config: SimulationConfig,
    bins: usize,
    format: OutputFormat,
    out: &mut W,
) -> Result<SimulationResult> {
    info!(
        instruments = portfolio.len(),
        n_simulations = config.n_simulations(),
        "Starting PnL simulation"
    );

    let cost_basis = config.cost_basis();
    let result = PnlEngine::new(config).run(portfolio, scenario)?;
    let histogram = match Histogram::from_samples(result.pnl_samples(), bins) {
        Ok(histogram) => Some(histogram),
        Err(PnlError::EmptySample) => {
            warn!("No finite PnL sample; histogram skipped");
            None
        }
        Err(err) => return Err(err.into()),
    };

    match format {
        OutputFormat::Table => write_table(&result, histogram.as_ref(), cost_basis, out)?,
        OutputFormat::Json => {
            let report = SimulationReport {
                scenario,
                n_simulations: result.len(),
                seed: result.seed(),
                cost_basis,
                initial_cost: result.initial_cost(),
                future_cost: result.future_cost(),
                standard_error: result.standard_error(),
                statistics: result.statistics(),
                histogram: histogram
                    .iter()
                    .flat_map(|h| h.bins())
                    .map(|(lower, upper, count)| BinRow {
                        lower,
                        upper,
                        count,
                    })
                    .collect(),
            };
            write_json(out, &report)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            let samples = result.terminal_prices().iter().zip(result.pnl_samples());
            for (simulation, (&terminal_price, &pnl)) in samples.enumerate() {
                writer.serialize(SampleRow {
                    simulation,
                    terminal_price,
                    pnl,
                })?;
            }
            writer.flush()?;
        }
    }

    info!(
        seed = result.seed(),
        mean = result.mean(),
        "Simulation complete"
    );
    Ok(result)
}

fn write_table<W: Write>(
    result: &SimulationResult,
    histogram: Option<&Histogram>,
    cost_basis: CostBasis,
    out: &mut W,
) -> Result<()> {
    let stats = result.statistics();
    let summary: Vec<(&str, String)> = vec![
        ("Simulations", result.len().to_string()),
        ("Seed", result.seed().to_string()),
        ("Cost basis", cost_basis.to_string()),
        ("Initial cost", fmt_value(result.initial_cost())),
        ("Future cost", fmt_value(result.future_cost())),
        ("Mean PnL", fmt_value(stats.mean)),
        ("Std dev", fmt_value(stats.std)),
        ("Std error", fmt_value(result.standard_error())),
        ("Skew", fmt_value(stats.skew)),
        ("Excess kurtosis", fmt_value(stats.kurtosis)),
        ("Min", fmt_value(stats.min)),
        ("5th percentile", fmt_value(stats.percentile_5)),
        ("95th percentile", fmt_value(stats.percentile_95)),
        ("Max", fmt_value(stats.max)),
    ];
    let rows: Vec<Vec<String>> = summary
        .into_iter()
        .map(|(name, value)| vec![name.to_string(), value])
        .collect();
    write!(out, "{}", render_table(&["Metric", "Value"], &rows))?;

    writeln!(out, "\nPnL distribution")?;
    let Some(histogram) = histogram else {
        writeln!(out, "(no finite samples)")?;
        return Ok(());
    };
    let scale = histogram.max_count().max(1);
    for (lower, upper, count) in histogram.bins() {
        let bar = "█".repeat(count * BAR_WIDTH / scale);
        writeln!(
            out,
            "[{:>12}, {:>12}) {:>7} {}",
            fmt_value(lower),
            fmt_value(upper),
            count,
            bar
        )?;
    }
    Ok(())
}

//! Price command implementation
//!
//! Lists each instrument with its cost and the aggregate initial cost.

use pricer_core::market_data::MarketContext;
use pricer_core::traits::Priceable;
use pricer_models::instruments::InstrumentKind;
use pricer_pricing::mc::CostBasis;
use pricer_risk::portfolio::{aggregate_cost, Portfolio};
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::output::{fmt_value, render_table, write_json, OutputFormat};
use crate::Result;

/// One priced instrument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    /// Position in the portfolio
    pub index: usize,
    /// Instrument kind
    #[serde(rename = "type")]
    pub kind: InstrumentKind,
    /// Human-readable summary
    pub description: String,
    /// Signed position size
    pub quantity: f64,
    /// Cost under the selected basis
    pub cost: f64,
}

#[derive(Debug, Serialize)]
struct PriceReport<'a> {
    cost_basis: CostBasis,
    spot: f64,
    rate: f64,
    maturity: f64,
    instruments: &'a [PriceRow],
    initial_cost: f64,
}

/// Prices every instrument of `portfolio` under `basis`.
///
/// Returns the rows and the aggregate initial cost.
pub fn price_rows(
    portfolio: &Portfolio<f64>,
    market: &MarketContext<f64>,
    basis: CostBasis,
) -> (Vec<PriceRow>, f64) {
    let rows = portfolio
        .iter()
        .enumerate()
        .map(|(index, instrument)| PriceRow {
            index,
            kind: instrument.kind(),
            description: instrument.to_string(),
            quantity: instrument.quantity(),
            cost: match basis {
                CostBasis::Snapshot => instrument.price(market),
                CostBasis::Market => instrument.price_at_market(market),
            },
        })
        .collect();
    (rows, aggregate_cost(portfolio, market, basis))
}

/// Run the price command
pub fn run<W: Write>(
    portfolio: &Portfolio<f64>,
    market: &MarketContext<f64>,
    basis: CostBasis,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    info!(
        instruments = portfolio.len(),
        cost_basis = %basis,
        "Pricing portfolio"
    );

    let (rows, total) = price_rows(portfolio, market, basis);

    match format {
        OutputFormat::Table => {
            let mut cells: Vec<Vec<String>> = rows
                .iter()
                .map(|row| {
                    vec![
                        row.index.to_string(),
                        row.description.clone(),
                        fmt_value(row.quantity),
                        fmt_value(row.cost),
                    ]
                })
                .collect();
            cells.push(vec![
                "Total".to_string(),
                String::new(),
                String::new(),
                fmt_value(total),
            ]);
            write!(
                out,
                "{}",
                render_table(&["#", "Instrument", "Quantity", "Cost"], &cells)
            )?;
            writeln!(
                out,
                "Cost basis: {} (S = {}, r = {}, T = {})",
                basis,
                market.spot(),
                market.rate(),
                market.maturity()
            )?;
        }
        OutputFormat::Json => {
            let report = PriceReport {
                cost_basis: basis,
                spot: market.spot(),
                rate: market.rate(),
                maturity: market.maturity(),
                instruments: &rows,
                initial_cost: total,
            };
            write_json(out, &report)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for row in &rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }

    info!(initial_cost = total, "Pricing complete");
    Ok(())
}

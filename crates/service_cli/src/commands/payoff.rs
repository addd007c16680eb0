//! Payoff command implementation
//!
//! Tabulates the portfolio payoff at expiry over a spot grid, per
//! instrument and in total.

use pricer_risk::portfolio::{PayoffDiagram, Portfolio};
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::output::{fmt_value, render_table, write_json, OutputFormat};
use crate::Result;

/// Spot grid for the diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoffGrid {
    /// Lowest spot
    pub lower: f64,
    /// Highest spot
    pub upper: f64,
    /// Number of points, endpoints included
    pub points: usize,
}

#[derive(Debug, Serialize)]
struct InstrumentSeries<'a> {
    description: String,
    payoff: &'a [f64],
}

#[derive(Debug, Serialize)]
struct PayoffReport<'a> {
    spots: &'a [f64],
    total: &'a [f64],
    instruments: Vec<InstrumentSeries<'a>>,
}

/// Run the payoff command
pub fn run<W: Write>(
    portfolio: &Portfolio<f64>,
    grid: PayoffGrid,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    info!(
        lower = grid.lower,
        upper = grid.upper,
        points = grid.points,
        "Building payoff diagram"
    );

    let diagram = PayoffDiagram::over_range(portfolio, grid.lower, grid.upper, grid.points)?;
    let labels: Vec<String> = portfolio
        .iter()
        .enumerate()
        .map(|(i, instrument)| format!("#{} {}", i, instrument.kind()))
        .collect();

    match format {
        OutputFormat::Table => {
            let mut headers: Vec<&str> = vec!["Spot"];
            headers.extend(labels.iter().map(String::as_str));
            headers.push("Total");

            let rows: Vec<Vec<String>> = (0..diagram.spots().len())
                .map(|j| {
                    let mut row = vec![fmt_value(diagram.spots()[j])];
                    row.extend(diagram.by_instrument().iter().map(|s| fmt_value(s[j])));
                    row.push(fmt_value(diagram.total()[j]));
                    row
                })
                .collect();
            write!(out, "{}", render_table(&headers, &rows))?;
            for (label, instrument) in labels.iter().zip(portfolio.iter()) {
                writeln!(out, "{}: {}", label, instrument)?;
            }
        }
        OutputFormat::Json => {
            let instruments = portfolio
                .iter()
                .zip(diagram.by_instrument())
                .map(|(instrument, series)| InstrumentSeries {
                    description: instrument.to_string(),
                    payoff: series,
                })
                .collect();
            let report = PayoffReport {
                spots: diagram.spots(),
                total: diagram.total(),
                instruments,
            };
            write_json(out, &report)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            let mut header = vec!["spot".to_string()];
            header.extend((0..portfolio.len()).map(|i| format!("instrument_{}", i)));
            header.push("total".to_string());
            writer.write_record(&header)?;

            for (j, (spot, total)) in diagram.points().enumerate() {
                let mut record = vec![spot.to_string()];
                record.extend(diagram.by_instrument().iter().map(|s| s[j].to_string()));
                record.push(total.to_string());
                writer.write_record(&record)?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::{Debt, Forward, Instrument};

    fn book() -> Portfolio<f64> {
        let parts: Vec<Instrument<f64>> = vec![
            Debt::new(-10.0).unwrap().into(),
            Forward::new(100.0, 1.0).unwrap().into(),
        ];
        Portfolio::from(parts)
    }

    const GRID: PayoffGrid = PayoffGrid {
        lower: 90.0,
        upper: 110.0,
        points: 3,
    };

    #[test]
    fn test_csv_has_one_row_per_spot() {
        let mut out = Vec::new();
        run(&book(), GRID, OutputFormat::Csv, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "spot,instrument_0,instrument_1,total");
        assert_eq!(lines[1], "90,-10,-10,-20");
        assert_eq!(lines[2], "100,-10,0,-10");
        assert_eq!(lines[3], "110,-10,10,0");
    }

    #[test]
    fn test_json_series_align_with_spots() {
        let mut out = Vec::new();
        run(&book(), GRID, OutputFormat::Json, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["spots"].as_array().unwrap().len(), 3);
        assert_eq!(value["instruments"].as_array().unwrap().len(), 2);
        assert_eq!(value["total"][2].as_f64(), Some(0.0));
    }

    #[test]
    fn test_bad_grid_is_rejected() {
        let grid = PayoffGrid {
            lower: 110.0,
            upper: 90.0,
            points: 3,
        };
        let mut out = Vec::new();
        assert!(run(&book(), grid, OutputFormat::Table, &mut out).is_err());
        assert!(out.is_empty());
    }
}

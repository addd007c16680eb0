//! Portfolio file loading.
//!
//! Two layouts are accepted, chosen by file extension:
//!
//! - **TOML**: an array of `[[instruments]]` tables, each with a `type` key
//! - **CSV**: header `type,kind,strike,quantity,face_value,spot,maturity,rate,volatility`,
//!   empty cells for fields a row does not use
//!
//! Every record goes through the validated instrument constructors, so a
//! loaded [`Portfolio`] never holds an invalid instrument.

use pricer_core::types::PricingError;
use pricer_models::instruments::{
    Debt, EuropeanOption, Forward, Instrument, InstrumentKind, OptionKind,
};
use pricer_risk::portfolio::Portfolio;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::{CliError, Result};

/// One row of a portfolio file, before validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InstrumentRecord {
    /// `option`, `debt` (or `bond`), `forward`
    #[serde(rename = "type")]
    pub instrument_type: String,
    /// `call` or `put`; options only
    #[serde(default)]
    pub kind: Option<String>,
    /// Options and forwards
    #[serde(default)]
    pub strike: Option<f64>,
    /// Defaults to 1
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Debt only
    #[serde(default)]
    pub face_value: Option<f64>,
    /// Option snapshot spot
    #[serde(default)]
    pub spot: Option<f64>,
    /// Option snapshot maturity
    #[serde(default)]
    pub maturity: Option<f64>,
    /// Option snapshot rate
    #[serde(default)]
    pub rate: Option<f64>,
    /// Option volatility
    #[serde(default)]
    pub volatility: Option<f64>,
}

fn required(
    value: Option<f64>,
    kind: InstrumentKind,
    field: &str,
) -> std::result::Result<f64, PricingError> {
    value.ok_or_else(|| {
        PricingError::InvalidInput(format!("{} requires '{}'", kind.as_str(), field))
    })
}

impl TryFrom<InstrumentRecord> for Instrument<f64> {
    type Error = PricingError;

    fn try_from(record: InstrumentRecord) -> std::result::Result<Self, Self::Error> {
        let kind: InstrumentKind = record.instrument_type.parse()?;
        let quantity = record.quantity.unwrap_or(1.0);

        let instrument = match kind {
            InstrumentKind::Option => {
                let option_kind: OptionKind = record
                    .kind
                    .as_deref()
                    .ok_or_else(|| PricingError::InvalidInput("option requires 'kind'".to_string()))?
                    .parse()?;
                let strike = required(record.strike, kind, "strike")?;

                let mut builder = EuropeanOption::builder(option_kind, strike).quantity(quantity);
                if let Some(spot) = record.spot {
                    builder = builder.spot(spot);
                }
                if let Some(maturity) = record.maturity {
                    builder = builder.maturity(maturity);
                }
                if let Some(rate) = record.rate {
                    builder = builder.rate(rate);
                }
                if let Some(volatility) = record.volatility {
                    builder = builder.volatility(volatility);
                }
                Instrument::Option(builder.build()?)
            }
            InstrumentKind::Debt => {
                let face_value = required(record.face_value, kind, "face_value")?;
                Instrument::Debt(Debt::new(face_value)?.with_quantity(quantity)?)
            }
            InstrumentKind::Forward => {
                let strike = required(record.strike, kind, "strike")?;
                Instrument::Forward(Forward::new(strike, quantity)?)
            }
        };

        Ok(instrument)
    }
}

#[derive(Debug, Deserialize)]
struct PortfolioFile {
    #[serde(default)]
    instruments: Vec<InstrumentRecord>,
}

fn build_portfolio(records: Vec<InstrumentRecord>) -> Result<Portfolio<f64>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Instrument::try_from(record).map_err(|source| CliError::Record { index, source })
        })
        .collect()
}

/// Parses a TOML portfolio.
pub fn parse_toml_portfolio(content: &str) -> Result<Portfolio<f64>> {
    let file: PortfolioFile = toml::from_str(content)?;
    build_portfolio(file.instruments)
}

/// Parses a CSV portfolio with a header row.
pub fn parse_csv_portfolio<R: Read>(reader: R) -> Result<Portfolio<f64>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<InstrumentRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    build_portfolio(records)
}

/// Loads a portfolio file, choosing the parser by extension.
///
/// # Errors
///
/// - `CliError::FileNotFound` if `path` does not exist
/// - `CliError::InvalidArgument` for an extension other than `toml` or `csv`
/// - `CliError::Record` for the first record that fails validation
pub fn load_portfolio(path: &Path) -> Result<Portfolio<f64>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let portfolio = match extension.as_deref() {
        Some("toml") => parse_toml_portfolio(&std::fs::read_to_string(path)?)?,
        Some("csv") => parse_csv_portfolio(std::fs::File::open(path)?)?,
        _ => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown portfolio format: {}. Supported: toml, csv",
                path.display()
            )))
        }
    };

    debug!(path = %path.display(), instruments = portfolio.len(), "Loaded portfolio");
    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::ValidationError;

    fn record(instrument_type: &str) -> InstrumentRecord {
        InstrumentRecord {
            instrument_type: instrument_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_option_record_uses_builder_defaults() {
        let rec = InstrumentRecord {
            kind: Some("Put".to_string()),
            strike: Some(30.0),
            ..record("option")
        };
        let instrument = Instrument::try_from(rec).unwrap();
        let option = instrument.as_option().unwrap();

        assert_eq!(option.kind(), OptionKind::Put);
        assert_eq!(option.spot(), 100.0);
        assert_eq!(option.rate(), 0.12);
        assert_eq!(option.quantity(), 1.0);
    }

    #[test]
    fn test_bond_alias_builds_debt() {
        let rec = InstrumentRecord {
            face_value: Some(-10.0),
            quantity: Some(2.0),
            ..record("bond")
        };
        match Instrument::try_from(rec).unwrap() {
            Instrument::Debt(debt) => {
                assert_eq!(debt.face_value(), -10.0);
                assert_eq!(debt.quantity(), 2.0);
            }
            other => panic!("expected debt, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_is_unsupported() {
        let err = Instrument::try_from(record("swap")).unwrap_err();
        assert_eq!(err, PricingError::UnsupportedInstrument("swap".to_string()));
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let err = Instrument::try_from(record("forward")).unwrap_err();
        assert_eq!(err, PricingError::InvalidInput("forward requires 'strike'".to_string()));

        let err = Instrument::try_from(record("option")).unwrap_err();
        assert_eq!(err, PricingError::InvalidInput("option requires 'kind'".to_string()));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let rec = InstrumentRecord {
            kind: Some("call".to_string()),
            strike: Some(-1.0),
            ..record("option")
        };
        let err = Instrument::try_from(rec).unwrap_err();
        assert_eq!(
            err,
            PricingError::from(ValidationError::InvalidStrike { strike: -1.0 })
        );
    }

    #[test]
    fn test_record_index_in_error() {
        let err = parse_toml_portfolio(
            r#"
            [[instruments]]
            type = "forward"
            strike = 100.0

            [[instruments]]
            type = "swap"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Record { index: 1, .. }));
    }

    #[test]
    fn test_csv_empty_cells_are_absent() {
        let csv = "type,kind,strike,quantity,face_value,spot,maturity,rate,volatility\n\
                   debt,,,,-10,,,,\n\
                   option,call,20,-1,,30,1,0.12,0.2\n";
        let portfolio = parse_csv_portfolio(csv.as_bytes()).unwrap();
        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.instruments()[1].quantity(), -1.0);
    }
}

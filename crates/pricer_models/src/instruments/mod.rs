//! Financial instrument definitions.
//!
//! Instruments are immutable value objects validated at construction.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects) for static dispatch:
//! - `Instrument<T>` enum wraps all instrument types
//! - Every variant implements the shared [`Payoff`] and [`Priceable`]
//!   capability traits, so aggregation code never inspects concrete types
//!
//! # Instrument Types
//!
//! - [`EuropeanOption`]: Call or put priced by Black-Scholes on its own
//!   market snapshot
//! - [`Debt`]: Zero-coupon debt, constant payoff
//! - [`Forward`]: Linear forward contract priced by cost of carry
//!
//! # Examples
//!
//! ```
//! use pricer_core::traits::Payoff;
//! use pricer_models::instruments::{Debt, EuropeanOption, Instrument, OptionKind};
//!
//! let book: Vec<Instrument<f64>> = vec![
//!     Debt::new(-10.0).unwrap().into(),
//!     EuropeanOption::builder(OptionKind::Put, 30.0).build().unwrap().into(),
//! ];
//!
//! let total: f64 = book.iter().map(|i| i.payoff(20.0)).sum();
//! assert_eq!(total, 0.0);
//! ```
//!
//! [`Payoff`]: pricer_core::traits::Payoff
//! [`Priceable`]: pricer_core::traits::Priceable

mod debt;
mod error;
mod forward;
mod option;

pub use debt::Debt;
pub use error::ValidationError;
pub use forward::Forward;
pub use option::{EuropeanOption, EuropeanOptionBuilder, OptionKind};

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use pricer_core::market_data::MarketContext;
use pricer_core::traits::{Payoff, Priceable};
use pricer_core::types::PricingError;

/// Instrument variant tag.
///
/// Parses from the `type` column of portfolio files.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
/// use pricer_models::instruments::InstrumentKind;
///
/// assert_eq!("bond".parse::<InstrumentKind>().unwrap(), InstrumentKind::Debt);
/// assert!(matches!(
///     "swap".parse::<InstrumentKind>(),
///     Err(PricingError::UnsupportedInstrument(_))
/// ));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum InstrumentKind {
    /// European call or put
    Option,
    /// Zero-coupon debt
    Debt,
    /// Forward contract
    Forward,
}

impl InstrumentKind {
    /// Lower-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentKind::Option => "option",
            InstrumentKind::Debt => "debt",
            InstrumentKind::Forward => "forward",
        }
    }
}

impl FromStr for InstrumentKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "option" => Ok(InstrumentKind::Option),
            "debt" | "bond" => Ok(InstrumentKind::Debt),
            "forward" => Ok(InstrumentKind::Forward),
            _ => Err(PricingError::UnsupportedInstrument(s.to_string())),
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstrumentKind::Option => write!(f, "Option"),
            InstrumentKind::Debt => write!(f, "Debt"),
            InstrumentKind::Forward => write!(f, "Forward"),
        }
    }
}

/// Portfolio instrument.
///
/// # Variants
/// - `Option`: European call or put
/// - `Debt`: Zero-coupon debt
/// - `Forward`: Forward contract
///
/// # Pricing
///
/// [`Priceable::price`] follows each variant's own convention: options read
/// their stored snapshot while debt and forwards read the supplied market.
/// [`Instrument::price_at_market`] prices every variant on the supplied
/// market instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Instrument<T: Float> {
    /// European option
    Option(EuropeanOption<T>),
    /// Zero-coupon debt
    Debt(Debt<T>),
    /// Forward contract
    Forward(Forward<T>),
}

impl<T: Float> Instrument<T> {
    /// Returns the variant tag.
    #[inline]
    pub fn kind(&self) -> InstrumentKind {
        match self {
            Instrument::Option(_) => InstrumentKind::Option,
            Instrument::Debt(_) => InstrumentKind::Debt,
            Instrument::Forward(_) => InstrumentKind::Forward,
        }
    }

    /// Signed position size.
    #[inline]
    pub fn quantity(&self) -> T {
        match self {
            Instrument::Option(o) => o.quantity(),
            Instrument::Debt(d) => d.quantity(),
            Instrument::Forward(f) => f.quantity(),
        }
    }

    /// Prices on the supplied market, including options.
    ///
    /// Options keep their own volatility but take spot, rate and maturity
    /// from `market`.
    pub fn price_at_market(&self, market: &MarketContext<T>) -> T {
        match self {
            Instrument::Option(o) => o.price_in(market),
            Instrument::Debt(d) => d.price(market),
            Instrument::Forward(f) => f.price(market),
        }
    }

    /// Returns the option, if this is one.
    pub fn as_option(&self) -> Option<&EuropeanOption<T>> {
        match self {
            Instrument::Option(o) => Some(o),
            _ => None,
        }
    }

    /// Returns whether this is an option.
    #[inline]
    pub fn is_option(&self) -> bool {
        matches!(self, Instrument::Option(_))
    }
}

impl<T: Float> Payoff<T> for Instrument<T> {
    #[inline]
    fn payoff(&self, spot: T) -> T {
        match self {
            Instrument::Option(o) => o.payoff(spot),
            Instrument::Debt(d) => d.payoff(spot),
            Instrument::Forward(f) => f.payoff(spot),
        }
    }

    fn accumulate_payoff(&self, spots: &[T], out: &mut [T]) {
        match self {
            Instrument::Option(o) => o.accumulate_payoff(spots, out),
            Instrument::Debt(d) => d.accumulate_payoff(spots, out),
            Instrument::Forward(f) => f.accumulate_payoff(spots, out),
        }
    }
}

impl<T: Float> Priceable<T> for Instrument<T> {
    fn price(&self, market: &MarketContext<T>) -> T {
        match self {
            Instrument::Option(o) => o.price(),
            Instrument::Debt(d) => d.price(market),
            Instrument::Forward(f) => f.price(market),
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for Instrument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instrument::Option(o) => fmt::Display::fmt(o, f),
            Instrument::Debt(d) => fmt::Display::fmt(d, f),
            Instrument::Forward(fwd) => fmt::Display::fmt(fwd, f),
        }
    }
}

impl<T: Float> From<EuropeanOption<T>> for Instrument<T> {
    fn from(option: EuropeanOption<T>) -> Self {
        Instrument::Option(option)
    }
}

impl<T: Float> From<Debt<T>> for Instrument<T> {
    fn from(debt: Debt<T>) -> Self {
        Instrument::Debt(debt)
    }
}

impl<T: Float> From<Forward<T>> for Instrument<T> {
    fn from(forward: Forward<T>) -> Self {
        Instrument::Forward(forward)
    }
}

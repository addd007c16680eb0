//! European option definitions.
//!
//! A [`EuropeanOption`] carries its own market snapshot (spot, rate,
//! volatility, maturity) so it can be priced with Black-Scholes without any
//! caller-supplied context.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use pricer_core::market_data::MarketContext;
use pricer_core::traits::{Payoff, Priceable};

use super::error::ValidationError;
use crate::analytical::BlackScholes;

/// Call or put.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike: max(S - K, 0)
    Call,
    /// Right to sell at the strike: max(K - S, 0)
    Put,
}

impl OptionKind {
    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }

    /// Intrinsic value of one unit at `spot`.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        match self {
            OptionKind::Call => (spot - strike).max(T::zero()),
            OptionKind::Put => (strike - spot).max(T::zero()),
        }
    }
}

impl FromStr for OptionKind {
    type Err = ValidationError;

    /// Case-insensitive parse of `"call"` / `"put"`.
    ///
    /// ```
    /// use pricer_models::instruments::OptionKind;
    ///
    /// assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
    /// assert!("straddle".parse::<OptionKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(ValidationError::UnknownOptionKind {
                kind: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

/// European option with an embedded market snapshot.
///
/// # Payoff
/// - Call: `max(S - K, 0) * quantity`
/// - Put: `max(K - S, 0) * quantity`
///
/// A negative quantity is a short position.
///
/// # Examples
/// ```
/// use pricer_core::traits::Payoff;
/// use pricer_models::instruments::{EuropeanOption, OptionKind};
///
/// let short_call = EuropeanOption::builder(OptionKind::Call, 30.0_f64)
///     .quantity(-1.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(short_call.payoff_vec(&[20.0, 30.0, 50.0]), vec![0.0, 0.0, -20.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EuropeanOption<T: Float> {
    kind: OptionKind,
    strike: T,
    spot: T,
    maturity: T,
    rate: T,
    volatility: T,
    quantity: T,
}

impl<T: Float> EuropeanOption<T> {
    /// Creates a validated European option.
    ///
    /// # Arguments
    /// * `kind` - Call or put
    /// * `strike` - Strike price (must be positive)
    /// * `spot` - Reference spot of the stored snapshot (must be positive)
    /// * `maturity` - Time to expiry in years (must be non-negative)
    /// * `rate` - Risk-free rate of the stored snapshot (must be finite)
    /// * `volatility` - Volatility of the stored snapshot (must be positive)
    /// * `quantity` - Signed position size (must be finite)
    ///
    /// # Errors
    /// The first offending field, checked in the order strike, spot,
    /// maturity, volatility, rate, quantity.
    pub fn new(
        kind: OptionKind,
        strike: T,
        spot: T,
        maturity: T,
        rate: T,
        volatility: T,
        quantity: T,
    ) -> Result<Self, ValidationError> {
        ValidationError::check_strike(strike)?;
        ValidationError::check_spot(spot)?;
        ValidationError::check_maturity(maturity)?;
        ValidationError::check_volatility(volatility)?;
        ValidationError::check_finite("rate", rate)?;
        ValidationError::check_finite("quantity", quantity)?;

        Ok(Self {
            kind,
            strike,
            spot,
            maturity,
            rate,
            volatility,
            quantity,
        })
    }

    /// Starts a builder with the default snapshot: spot 100, maturity 1 year,
    /// rate 12%, volatility 20%, quantity 1.
    pub fn builder(kind: OptionKind, strike: T) -> EuropeanOptionBuilder<T> {
        EuropeanOptionBuilder::new(kind, strike)
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the snapshot spot.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the time to expiry.
    #[inline]
    pub fn maturity(&self) -> T {
        self.maturity
    }

    /// Returns the snapshot risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the snapshot volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the signed quantity.
    #[inline]
    pub fn quantity(&self) -> T {
        self.quantity
    }

    /// Black-Scholes value on the option's own snapshot, times quantity.
    ///
    /// With zero maturity this is the intrinsic value at the snapshot spot.
    ///
    /// ```
    /// use pricer_models::instruments::{EuropeanOption, OptionKind};
    ///
    /// let atm = EuropeanOption::builder(OptionKind::Call, 100.0_f64)
    ///     .maturity(0.0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(atm.price(), 0.0);
    /// ```
    pub fn price(&self) -> T {
        BlackScholes::from_validated(self.spot, self.rate, self.volatility).price(
            self.kind,
            self.strike,
            self.maturity,
        ) * self.quantity
    }

    /// Black-Scholes value on the caller's spot, rate and maturity, keeping
    /// the option's own volatility.
    pub fn price_in(&self, market: &MarketContext<T>) -> T {
        BlackScholes::from_validated(market.spot(), market.rate(), self.volatility).price(
            self.kind,
            self.strike,
            market.maturity(),
        ) * self.quantity
    }

    /// Whether the stored snapshot agrees with `market` on spot, rate and
    /// maturity within a relative tolerance.
    pub fn snapshot_matches(&self, market: &MarketContext<T>, tolerance: T) -> bool {
        let close = |a: T, b: T| (a - b).abs() <= tolerance * T::one().max(a.abs().max(b.abs()));
        close(self.spot, market.spot())
            && close(self.rate, market.rate())
            && close(self.maturity, market.maturity())
    }
}

impl<T: Float> Payoff<T> for EuropeanOption<T> {
    #[inline]
    fn payoff(&self, spot: T) -> T {
        self.kind.intrinsic(spot, self.strike) * self.quantity
    }
}

impl<T: Float> Priceable<T> for EuropeanOption<T> {
    /// Prices on the stored snapshot; the market context is not read.
    fn price(&self, _market: &MarketContext<T>) -> T {
        EuropeanOption::price(self)
    }
}

impl<T: Float + fmt::Display> fmt::Display for EuropeanOption<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} K={} qty={} (S={} T={} r={} σ={})",
            self.kind,
            self.strike,
            self.quantity,
            self.spot,
            self.maturity,
            self.rate,
            self.volatility
        )
    }
}

/// Builder for [`EuropeanOption`].
///
/// Validation happens in [`build`](EuropeanOptionBuilder::build).
///
/// # Examples
/// ```
/// use pricer_models::instruments::{EuropeanOption, OptionKind};
///
/// let put = EuropeanOption::builder(OptionKind::Put, 95.0_f64)
///     .spot(100.0)
///     .maturity(0.5)
///     .rate(0.03)
///     .volatility(0.25)
///     .quantity(10.0)
///     .build()
///     .unwrap();
/// assert_eq!(put.quantity(), 10.0);
///
/// assert!(EuropeanOption::builder(OptionKind::Put, 95.0_f64)
///     .volatility(0.0)
///     .build()
///     .is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EuropeanOptionBuilder<T: Float> {
    kind: OptionKind,
    strike: T,
    spot: T,
    maturity: T,
    rate: T,
    volatility: T,
    quantity: T,
}

impl<T: Float> EuropeanOptionBuilder<T> {
    fn new(kind: OptionKind, strike: T) -> Self {
        let from = |v: f64| T::from(v).unwrap_or_else(T::nan);
        Self {
            kind,
            strike,
            spot: from(100.0),
            maturity: T::one(),
            rate: from(0.12),
            volatility: from(0.20),
            quantity: T::one(),
        }
    }

    /// Sets the snapshot spot.
    pub fn spot(mut self, spot: T) -> Self {
        self.spot = spot;
        self
    }

    /// Sets the time to expiry in years.
    pub fn maturity(mut self, maturity: T) -> Self {
        self.maturity = maturity;
        self
    }

    /// Sets the snapshot risk-free rate.
    pub fn rate(mut self, rate: T) -> Self {
        self.rate = rate;
        self
    }

    /// Sets the snapshot volatility.
    pub fn volatility(mut self, volatility: T) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets the signed quantity.
    pub fn quantity(mut self, quantity: T) -> Self {
        self.quantity = quantity;
        self
    }

    /// Validates and builds the option.
    pub fn build(self) -> Result<EuropeanOption<T>, ValidationError> {
        EuropeanOption::new(
            self.kind,
            self.strike,
            self.spot,
            self.maturity,
            self.rate,
            self.volatility,
            self.quantity,
        )
    }
}

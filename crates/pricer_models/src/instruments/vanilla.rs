//! European vanilla option contract.
//!
//! The contract carries market inputs in the units quoted by trading
//! desks: implied volatility, risk-free rate and dividend yield are all
//! percentages (20 means 20%). Conversion to decimal model parameters
//! happens in the analytical layer.

use pricer_core::types::{time_to_expiry, Timestamp};

use super::payoff::OptionKind;

/// European option contract together with the market inputs needed to value it.
///
/// The contract itself is never validated on construction; the valuation
/// boundary checks every field and reports the first violation.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use pricer_models::instruments::{OptionContract, OptionKind};
///
/// let expiry = Utc.with_ymd_and_hms(2025, 12, 19, 21, 0, 0).unwrap();
/// let contract = OptionContract::new(100.0, 105.0, expiry, OptionKind::Call, 20.0)
///     .with_risk_free_rate(5.0)
///     .with_dividend_yield(1.5);
///
/// assert_eq!(contract.strike(), 105.0);
/// assert_eq!(contract.risk_free_rate(), 5.0);
/// assert_eq!(contract.dividend_yield(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionContract {
    underlying: f64,
    strike: f64,
    expiry: Timestamp,
    kind: OptionKind,
    implied_volatility: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    risk_free_rate: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    dividend_yield: f64,
}

impl OptionContract {
    /// Creates a contract with zero risk-free rate and zero dividend yield.
    ///
    /// # Arguments
    /// * `underlying` - Current underlying price (S)
    /// * `strike` - Strike price (K)
    /// * `expiry` - Expiry timestamp
    /// * `kind` - Call or Put
    /// * `implied_volatility` - Volatility in percent (20.0 = 20%)
    pub fn new(
        underlying: f64,
        strike: f64,
        expiry: Timestamp,
        kind: OptionKind,
        implied_volatility: f64,
    ) -> Self {
        Self {
            underlying,
            strike,
            expiry,
            kind,
            implied_volatility,
            risk_free_rate: 0.0,
            dividend_yield: 0.0,
        }
    }

    /// Sets the risk-free rate in percent.
    #[must_use]
    pub fn with_risk_free_rate(mut self, risk_free_rate: f64) -> Self {
        self.risk_free_rate = risk_free_rate;
        self
    }

    /// Sets the continuous dividend yield in percent.
    #[must_use]
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Returns the same contract with the given payoff kind.
    #[must_use]
    pub fn with_kind(mut self, kind: OptionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the underlying price.
    #[inline]
    pub fn underlying(&self) -> f64 {
        self.underlying
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the expiry timestamp.
    #[inline]
    pub fn expiry(&self) -> Timestamp {
        self.expiry
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the implied volatility in percent.
    #[inline]
    pub fn implied_volatility(&self) -> f64 {
        self.implied_volatility
    }

    /// Returns the risk-free rate in percent.
    #[inline]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Returns the dividend yield in percent.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Year fraction (ACT/365) from `evaluation_time` until expiry.
    ///
    /// # Examples
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use pricer_models::instruments::{OptionContract, OptionKind};
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let expiry = now + Duration::hours(2190);
    /// let contract = OptionContract::new(100.0, 100.0, expiry, OptionKind::Put, 25.0);
    /// assert_eq!(contract.time_to_expiry(now), 0.25);
    /// ```
    #[inline]
    pub fn time_to_expiry(&self, evaluation_time: Timestamp) -> f64 {
        time_to_expiry(evaluation_time, self.expiry)
    }

    /// Intrinsic value at the current underlying price.
    #[inline]
    pub fn intrinsic(&self) -> f64 {
        self.kind.intrinsic(self.underlying, self.strike)
    }
}

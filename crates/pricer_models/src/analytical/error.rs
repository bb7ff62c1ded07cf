//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Parameter validation and numerical failures of the
//!   Black-Scholes model and valuation engine

use pricer_core::types::{PricingError, Timestamp};
use thiserror::Error;

/// Analytical pricing errors.
///
/// Each parameter variant identifies the contract field that violated its
/// constraint (see [`AnalyticalError::field`]).
///
/// # Variants
/// - `InvalidSpot`: Non-positive or non-finite underlying price
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidVolatility`: Non-positive or non-finite volatility
/// - `InvalidRate`: Non-finite risk-free rate
/// - `InvalidDividend`: Non-finite dividend yield
/// - `InvalidTimeToExpiry`: Evaluation time at or after expiry
/// - `NumericalInstability`: Finite inputs produced a non-finite result
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// assert_eq!(err.field(), Some("implied_volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid underlying price (must be positive and finite).
    #[error("Invalid underlying price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (must be positive and finite).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility (must be positive and finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid risk-free rate (must be finite).
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Invalid dividend yield (must be finite).
    #[error("Invalid dividend yield: q = {dividend}")]
    InvalidDividend {
        /// The invalid dividend yield value
        dividend: f64,
    },

    /// Evaluation time is not strictly before expiry.
    #[error(
        "Invalid time to expiry: evaluation at {evaluation_time} is not before expiry {expiry}"
    )]
    InvalidTimeToExpiry {
        /// Contract expiry
        expiry: Timestamp,
        /// Requested evaluation time
        evaluation_time: Timestamp,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl AnalyticalError {
    /// Name of the contract field that violated its constraint.
    ///
    /// Returns `None` for failures not attributable to a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            AnalyticalError::InvalidSpot { .. } => Some("underlying"),
            AnalyticalError::InvalidStrike { .. } => Some("strike"),
            AnalyticalError::InvalidVolatility { .. } => Some("implied_volatility"),
            AnalyticalError::InvalidRate { .. } => Some("risk_free_rate"),
            AnalyticalError::InvalidDividend { .. } => Some("dividend_yield"),
            AnalyticalError::InvalidTimeToExpiry { .. } => Some("expiry"),
            AnalyticalError::NumericalInstability { .. } => None,
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}

//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Workspace-wide category for pricing failures
//! - `TimeError`: Errors from parsing time conventions

use thiserror::Error;

/// Categorised pricing errors.
///
/// Model- and instrument-level error types convert into this category so
/// that callers layered above the kernel can handle failures uniformly.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or contract parameters
/// - `NumericalInstability`: Computation produced a non-finite result
/// - `UnsupportedInstrument`: Instrument type not supported by the model
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Instrument type not supported
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

/// Time convention errors.
///
/// # Examples
/// ```
/// use pricer_core::types::TimeError;
///
/// let err = TimeError::UnknownDayCount("BUS/252".to_string());
/// assert_eq!(format!("{}", err), "Unknown day count convention: BUS/252");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Day count convention name was not recognised.
    #[error("Unknown day count convention: {0}")]
    UnknownDayCount(String),
}

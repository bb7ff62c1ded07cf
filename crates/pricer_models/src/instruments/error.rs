//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! construction and parsing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `UnsupportedOptionKind`: Option kind tag outside {Call, Put}
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::UnsupportedOptionKind { kind: "Straddle".to_string() };
/// assert!(format!("{}", err).contains("Straddle"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentError {
    /// Option kind is not one of the supported payoff conventions.
    #[error("Unsupported option kind: {kind:?} (expected Call or Put)")]
    UnsupportedOptionKind {
        /// The rejected kind tag
        kind: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::UnsupportedOptionKind { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
        }
    }
}

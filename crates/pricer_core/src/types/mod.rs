//! Core time and error types.
//!
//! This module provides:
//! - `time`: Timestamps, day count conventions and time-to-expiry
//! - `error`: Structured error types shared across the workspace
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Timestamp`], [`DayCountConvention`], [`time_to_expiry`] from `time`
//! - [`PricingError`], [`TimeError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{PricingError, TimeError};
pub use time::{hours_between, time_to_expiry, DayCountConvention, Timestamp};

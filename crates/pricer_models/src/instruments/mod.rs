//! Financial instrument definitions.
//!
//! This module provides the inputs of a Black-Scholes valuation:
//! - [`OptionKind`]: Closed Call/Put payoff tag with explicit rejection of other tags
//! - [`OptionContract`]: European option terms plus quoted market inputs
//! - [`InstrumentError`]: Instrument parsing errors
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pricer_models::instruments::{OptionContract, OptionKind};
//!
//! let expiry = Utc.with_ymd_and_hms(2026, 3, 20, 20, 0, 0).unwrap();
//! let kind: OptionKind = "Call".parse().unwrap();
//! let contract = OptionContract::new(100.0, 100.0, expiry, kind, 20.0).with_risk_free_rate(5.0);
//!
//! assert_eq!(contract.kind(), OptionKind::Call);
//! ```

mod error;
mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use payoff::OptionKind;
pub use vanilla::OptionContract;

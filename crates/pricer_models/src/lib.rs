//! # Pricer Models
//!
//! European option contracts and their Black-Scholes valuation.
//!
//! This crate provides:
//! - Option contract and option kind definitions (`instruments`)
//! - Standard normal distribution primitives (`analytical::distributions`)
//! - The Black-Scholes model with analytical Greeks (`analytical::black_scholes`)
//! - The valuation engine `value(contract, evaluation_time)` (`analytical::valuation`)
//!
//! ## Quick Start
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use pricer_models::analytical::value;
//! use pricer_models::instruments::{OptionContract, OptionKind};
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 2, 14, 30, 0).unwrap();
//! let expiry = now + Duration::days(90);
//! let contract = OptionContract::new(100.0, 105.0, expiry, OptionKind::Put, 22.5)
//!     .with_risk_free_rate(4.0)
//!     .with_dividend_yield(1.0);
//!
//! let result = value(&contract, now).unwrap();
//! assert!(result.value > contract.intrinsic() - 105.0 * 0.01);
//! assert!(result.delta < 0.0 && result.delta > -1.0);
//! ```
//!
//! ## Units
//!
//! Contracts quote volatility, rates and dividend yield in percent. Vega is
//! reported per volatility point, theta per calendar day and rho per rate
//! point. Time to expiry is measured ACT/365 on fractional hours.
//!
//! ## Logging
//!
//! Valuation emits `tracing` events (`debug` on rejected contracts, `trace`
//! with the intermediate terms). No subscriber is installed by the crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;

//! # pricer_core: Foundation Types for Option Valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Time types: `Timestamp`, `DayCountConvention`, `time_to_expiry` (`types::time`)
//! - Error types: `PricingError`, `TimeError` (`types::error`)
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - chrono: Timestamp arithmetic
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use pricer_core::types::{time_to_expiry, DayCountConvention};
//!
//! let evaluation = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let expiry = evaluation + Duration::hours(24 * 365);
//!
//! assert_eq!(time_to_expiry(evaluation, expiry), 1.0);
//! assert_eq!(DayCountConvention::Actual365Fixed.name(), "ACT/365");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `DayCountConvention`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;

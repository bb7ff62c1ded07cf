//! Time types and day count conventions for option valuation.
//!
//! This module provides:
//! - `Timestamp`: UTC point in time used for expiries and evaluation times
//! - `DayCountConvention`: Year fraction conventions
//! - `time_to_expiry`: Annualised time between an evaluation time and an expiry
//!
//! Year fractions are computed from the exact elapsed time (fractional hours),
//! not from whole calendar days, so intraday valuations decay smoothly.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, TimeZone, Utc};
//! use pricer_core::types::time::{time_to_expiry, DayCountConvention};
//!
//! let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let expiry = now + Duration::hours(8760);
//!
//! assert_eq!(time_to_expiry(now, expiry), 1.0);
//! assert_eq!(DayCountConvention::Actual365Fixed.year_fraction(now, expiry), 1.0);
//! ```

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::error::TimeError;

/// UTC point in time.
pub type Timestamp = DateTime<Utc>;

/// Hours in a calendar day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Days in a year under the fixed 365 basis.
pub const DAYS_PER_YEAR: f64 = 365.0;

const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Elapsed hours from `start` to `end`, including fractional hours.
///
/// Negative when `end` precedes `start`. Spans too long for nanosecond
/// resolution (about 292 years) fall back to whole seconds.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use pricer_core::types::time::hours_between;
///
/// let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
/// let end = start + Duration::minutes(90);
/// assert_eq!(hours_between(start, end), 1.5);
/// assert_eq!(hours_between(end, start), -1.5);
/// ```
pub fn hours_between(start: Timestamp, end: Timestamp) -> f64 {
    let elapsed = end.signed_duration_since(start);
    match elapsed.num_nanoseconds() {
        Some(nanos) => nanos as f64 / NANOS_PER_HOUR,
        None => elapsed.num_seconds() as f64 / SECONDS_PER_HOUR,
    }
}

/// Day count conventions for annualising elapsed time.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::DayCountConvention;
///
/// let act_365 = DayCountConvention::Actual365Fixed;
/// assert_eq!(act_365.name(), "ACT/365");
/// assert_eq!(act_365.hours_per_year(), 8760.0);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_hours / (24 * 365)
    ///
    /// Used in:
    /// - Most equity derivatives markets
    /// - Listed option analytics
    #[default]
    Actual365Fixed,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual365Fixed => "ACT/365",
        }
    }

    /// Number of hours making up one year under this convention.
    #[inline]
    pub fn hours_per_year(&self) -> f64 {
        match self {
            DayCountConvention::Actual365Fixed => HOURS_PER_DAY * DAYS_PER_YEAR,
        }
    }

    /// Calculates the year fraction between two timestamps.
    ///
    /// Returns a negative value when `end` precedes `start` instead of
    /// panicking; the sign tells the caller the contract has expired.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, TimeZone, Utc};
    /// use pricer_core::types::time::DayCountConvention;
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let end = start + Duration::days(73);
    ///
    /// let yf = DayCountConvention::Actual365Fixed.year_fraction(start, end);
    /// assert!((yf - 0.2).abs() < 1e-12);
    ///
    /// let yf_neg = DayCountConvention::Actual365Fixed.year_fraction(end, start);
    /// assert!((yf_neg + 0.2).abs() < 1e-12);
    /// ```
    pub fn year_fraction(&self, start: Timestamp, end: Timestamp) -> f64 {
        hours_between(start, end) / self.hours_per_year()
    }
}

impl FromStr for DayCountConvention {
    type Err = TimeError;

    /// Parses a day count convention (case-insensitive).
    ///
    /// Accepted aliases: "ACT/365", "Actual/365", "Act365", "A365",
    /// "ACT/365F", "Actual/365 Fixed".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' '], "").as_str() {
            "ACT365" | "ACTUAL365" | "A365" | "ACT365F" | "ACTUAL365FIXED" => {
                Ok(DayCountConvention::Actual365Fixed)
            }
            _ => Err(TimeError::UnknownDayCount(s.to_string())),
        }
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCountConvention;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCountConvention {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCountConvention {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCountConvention::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Annualised time from `evaluation_time` until `expiry` (ACT/365).
///
/// Non-positive once the evaluation time reaches the expiry.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use pricer_core::types::time::time_to_expiry;
///
/// let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// assert_eq!(time_to_expiry(now, now + Duration::hours(4380)), 0.5);
/// assert!(time_to_expiry(now, now - Duration::hours(1)) < 0.0);
/// ```
#[inline]
pub fn time_to_expiry(evaluation_time: Timestamp, expiry: Timestamp) -> f64 {
    DayCountConvention::Actual365Fixed.year_fraction(evaluation_time, expiry)
}

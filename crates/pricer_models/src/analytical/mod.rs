//! Analytical Black-Scholes valuation for European options.
//!
//! This module provides:
//! - `distributions`: Standard normal CDF and PDF
//! - `black_scholes`: The Black-Scholes model with analytical Greeks
//! - `valuation`: Contract-level valuation with input validation
//! - `error`: Validation and numerical error types

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod valuation;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, BlackScholesTerms, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use valuation::{value, value_unchecked, ValuationResult};

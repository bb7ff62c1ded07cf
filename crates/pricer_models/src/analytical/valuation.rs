//! Valuation engine for European option contracts.
//!
//! [`value`] is the checked entry point: it validates every contract field
//! and the evaluation time before running the Black-Scholes kernel.
//! [`value_unchecked`] runs the kernel directly and lets out-of-domain inputs
//! surface as NaN or infinities.

use pricer_core::types::Timestamp;
use tracing::{debug, trace};

use super::black_scholes::{BlackScholes, Greeks};
use super::error::AnalyticalError;
use crate::instruments::OptionContract;

/// Price and sensitivities of one contract at one evaluation time.
///
/// Units follow [`Greeks`]: vega per volatility point, theta per calendar
/// day, rho per rate point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValuationResult {
    /// Evaluation timestamp
    pub time: Timestamp,
    /// Option value
    pub value: f64,
    /// Delta: ∂V/∂S
    pub delta: f64,
    /// Gamma: ∂²V/∂S²
    pub gamma: f64,
    /// Vega per volatility point
    pub vega: f64,
    /// Theta per calendar day
    pub theta: f64,
    /// Rho per rate point
    pub rho: f64,
}

impl ValuationResult {
    fn new(time: Timestamp, value: f64, greeks: Greeks) -> Self {
        Self {
            time,
            value,
            delta: greeks.delta,
            gamma: greeks.gamma,
            vega: greeks.vega,
            theta: greeks.theta,
            rho: greeks.rho,
        }
    }

    /// Returns the sensitivities as a [`Greeks`] value.
    pub fn greeks(&self) -> Greeks {
        Greeks {
            delta: self.delta,
            gamma: self.gamma,
            vega: self.vega,
            theta: self.theta,
            rho: self.rho,
        }
    }

    fn is_finite(&self) -> bool {
        [self.value, self.delta, self.gamma, self.vega, self.theta, self.rho]
            .iter()
            .all(|x| x.is_finite())
    }
}

/// Values a European option contract at `evaluation_time`.
///
/// # Errors
/// - `InvalidSpot`, `InvalidStrike`: non-positive or non-finite prices
/// - `InvalidVolatility`: non-positive or non-finite implied volatility
/// - `InvalidRate`, `InvalidDividend`: non-finite rate or yield
/// - `InvalidTimeToExpiry`: `evaluation_time` at or after expiry
/// - `NumericalInstability`: valid inputs produced a non-finite output
///
/// # Examples
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use pricer_models::analytical::value;
/// use pricer_models::instruments::{OptionContract, OptionKind};
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap();
/// let expiry = now + Duration::hours(8760);
/// let contract = OptionContract::new(100.0, 100.0, expiry, OptionKind::Call, 20.0)
///     .with_risk_free_rate(5.0);
///
/// let result = value(&contract, now).unwrap();
/// assert!((result.value - 10.4506).abs() < 1e-4);
/// assert!((result.delta - 0.6368).abs() < 1e-4);
/// assert_eq!(result.time, now);
/// ```
pub fn value(
    contract: &OptionContract,
    evaluation_time: Timestamp,
) -> Result<ValuationResult, AnalyticalError> {
    let result = validate(contract, evaluation_time).and_then(|model| {
        let t = contract.time_to_expiry(evaluation_time);
        let result = evaluate(&model, contract, evaluation_time, t);
        if result.is_finite() {
            Ok(result)
        } else {
            Err(AnalyticalError::NumericalInstability {
                message: format!(
                    "non-finite valuation for {} K={} at t={}",
                    contract.kind(),
                    contract.strike(),
                    t
                ),
            })
        }
    });

    if let Err(err) = &result {
        debug!(
            field = err.field().unwrap_or("none"),
            error = %err,
            "rejected option contract"
        );
    }

    result
}

/// Values a contract without validating its inputs.
///
/// Inputs outside the model's domain (evaluation at or after expiry,
/// non-positive prices or volatility) produce NaN or infinite fields.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use pricer_models::analytical::value_unchecked;
/// use pricer_models::instruments::{OptionContract, OptionKind};
///
/// let expiry = Utc.with_ymd_and_hms(2024, 3, 15, 16, 0, 0).unwrap();
/// let contract = OptionContract::new(100.0, 100.0, expiry, OptionKind::Put, 20.0);
///
/// // Evaluating exactly at expiry divides by zero
/// assert!(value_unchecked(&contract, expiry).value.is_nan());
/// ```
pub fn value_unchecked(contract: &OptionContract, evaluation_time: Timestamp) -> ValuationResult {
    let model = BlackScholes::from_contract_unchecked(contract);
    let t = contract.time_to_expiry(evaluation_time);
    evaluate(&model, contract, evaluation_time, t)
}

fn validate(
    contract: &OptionContract,
    evaluation_time: Timestamp,
) -> Result<BlackScholes, AnalyticalError> {
    let model = BlackScholes::from_contract(contract)?;

    let strike = contract.strike();
    if !strike.is_finite() || strike <= 0.0 {
        return Err(AnalyticalError::InvalidStrike { strike });
    }

    if evaluation_time >= contract.expiry() {
        return Err(AnalyticalError::InvalidTimeToExpiry {
            expiry: contract.expiry(),
            evaluation_time,
        });
    }

    Ok(model)
}

fn evaluate(
    model: &BlackScholes,
    contract: &OptionContract,
    evaluation_time: Timestamp,
    t: f64,
) -> ValuationResult {
    let terms = model.terms(contract.strike(), t);
    trace!(
        kind = %contract.kind(),
        t = terms.time_to_expiry,
        d1 = terms.d1,
        d2 = terms.d2,
        discounted_strike = terms.discounted_strike,
        "black-scholes terms"
    );

    let (price, greeks) = model.evaluate_terms(&terms, contract.kind());
    ValuationResult::new(evaluation_time, price, greeks)
}

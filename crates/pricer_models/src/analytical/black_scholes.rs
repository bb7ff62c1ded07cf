//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The continuous dividend yield q enters only through d₁ and d₂; the
//! underlying is not discounted by e^(-qT) in the price, theta or rho.
//!
//! ## Units
//!
//! Model parameters are decimals (0.05 = 5%). Greeks are reported in market
//! units: vega per volatility point, theta per calendar day (ACT/365), rho
//! per rate point. Delta and gamma are unscaled.

use pricer_core::types::time::DAYS_PER_YEAR;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::{OptionContract, OptionKind};

/// Conversion factor between percentage quotes and decimals.
pub const PERCENT: f64 = 100.0;

/// Intermediate quantities of a single Black-Scholes evaluation.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// let terms = bs.terms(100.0, 1.0);
/// assert!((terms.d1 - 0.35).abs() < 1e-12);
/// assert!((terms.d2 - 0.15).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholesTerms {
    /// Time to expiry in years (T)
    pub time_to_expiry: f64,
    /// √T
    pub sqrt_t: f64,
    /// d₁
    pub d1: f64,
    /// d₂ = d₁ - σ√T
    pub d2: f64,
    /// K·e^(-rT)
    pub discounted_strike: f64,
}

/// Black-Scholes sensitivities in market units.
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `vega`: ∂V/∂σ per 1 volatility point
/// - `theta`: time decay per calendar day
/// - `rho`: ∂V/∂r per 1 rate point
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S
    pub delta: f64,
    /// Gamma: ∂²V/∂S²
    pub gamma: f64,
    /// Vega: ∂V/∂σ per volatility point
    pub vega: f64,
    /// Theta: value change per calendar day
    pub theta: f64,
    /// Rho: ∂V/∂r per rate point
    pub rho: f64,
}

/// Black-Scholes model for European option pricing.
///
/// Holds the market side of a valuation (spot, rate, dividend yield,
/// volatility) in decimal units; strike, time to expiry and option kind are
/// supplied per evaluation.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionKind;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price(100.0, 1.0, OptionKind::Call);
/// let put = bs.price(100.0, 1.0, OptionKind::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Continuous dividend yield (q)
    dividend: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate, annualised decimal (must be finite)
    /// * `dividend` - Continuous dividend yield, annualised decimal (must be finite)
    /// * `volatility` - Volatility, annualised decimal (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0 or not finite
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0 or not finite
    /// - `AnalyticalError::InvalidRate` if rate is not finite
    /// - `AnalyticalError::InvalidDividend` if dividend is not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.0, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0, 0.0).is_err());
    /// ```
    pub fn new(
        spot: f64,
        rate: f64,
        dividend: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        if !spot.is_finite() || spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }

        if !volatility.is_finite() || volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        if !rate.is_finite() {
            return Err(AnalyticalError::InvalidRate { rate });
        }

        if !dividend.is_finite() {
            return Err(AnalyticalError::InvalidDividend { dividend });
        }

        Ok(Self::new_unchecked(spot, rate, dividend, volatility))
    }

    /// Creates a model without validating its parameters.
    ///
    /// Out-of-domain parameters propagate as NaN or infinities through every
    /// formula instead of failing.
    #[inline]
    pub fn new_unchecked(spot: f64, rate: f64, dividend: f64, volatility: f64) -> Self {
        Self {
            spot,
            rate,
            dividend,
            volatility,
        }
    }

    /// Builds the model from a contract's quoted inputs.
    ///
    /// Volatility, rate and dividend yield are converted from percent to
    /// decimals. Errors report the percentage value as quoted on the contract.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::{OptionContract, OptionKind};
    ///
    /// let expiry = Utc.with_ymd_and_hms(2026, 1, 16, 21, 0, 0).unwrap();
    /// let contract = OptionContract::new(100.0, 100.0, expiry, OptionKind::Call, 20.0)
    ///     .with_risk_free_rate(5.0);
    ///
    /// let bs = BlackScholes::from_contract(&contract).unwrap();
    /// assert_eq!(bs.volatility(), 0.2);
    /// assert_eq!(bs.rate(), 0.05);
    /// ```
    pub fn from_contract(contract: &OptionContract) -> Result<Self, AnalyticalError> {
        Self::new(
            contract.underlying(),
            contract.risk_free_rate() / PERCENT,
            contract.dividend_yield() / PERCENT,
            contract.implied_volatility() / PERCENT,
        )
        .map_err(|err| match err {
            AnalyticalError::InvalidVolatility { .. } => AnalyticalError::InvalidVolatility {
                volatility: contract.implied_volatility(),
            },
            AnalyticalError::InvalidRate { .. } => AnalyticalError::InvalidRate {
                rate: contract.risk_free_rate(),
            },
            AnalyticalError::InvalidDividend { .. } => AnalyticalError::InvalidDividend {
                dividend: contract.dividend_yield(),
            },
            other => other,
        })
    }

    /// Builds the model from a contract without validation.
    #[inline]
    pub fn from_contract_unchecked(contract: &OptionContract) -> Self {
        Self::new_unchecked(
            contract.underlying(),
            contract.risk_free_rate() / PERCENT,
            contract.dividend_yield() / PERCENT,
            contract.implied_volatility() / PERCENT,
        )
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend(&self) -> f64 {
        self.dividend
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes d₁, d₂ and the discounted strike.
    ///
    /// No limiting-case handling: `expiry <= 0` or a non-positive strike
    /// yields NaN or infinite terms.
    #[inline]
    pub fn terms(&self, strike: f64, expiry: f64) -> BlackScholesTerms {
        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = self.volatility * sqrt_t;

        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate - self.dividend + self.volatility * self.volatility / 2.0) * expiry;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        BlackScholesTerms {
            time_to_expiry: expiry,
            sqrt_t,
            d1,
            d2,
            discounted_strike: strike * (-self.rate * expiry).exp(),
        }
    }

    /// Computes the d1 term of the Black-Scholes formula.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        self.terms(strike, expiry).d1
    }

    /// Computes the d2 term of the Black-Scholes formula.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.terms(strike, expiry).d2
    }

    /// Computes the option price.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionKind;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
    /// let price = bs.price(100.0, 1.0, OptionKind::Call);
    /// assert!((price - 10.4506).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price(&self, strike: f64, expiry: f64, kind: OptionKind) -> f64 {
        self.price_and_greeks(strike, expiry, kind).0
    }

    /// Computes the Greeks in market units.
    #[inline]
    pub fn greeks(&self, strike: f64, expiry: f64, kind: OptionKind) -> Greeks {
        self.price_and_greeks(strike, expiry, kind).1
    }

    /// Computes price and Greeks from a single set of terms.
    ///
    /// - Call Delta = N(d₁), Put Delta = N(d₁) - 1
    /// - Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts
    /// - Vega = S·φ(d₁)·√T / 100, identical for calls and puts
    /// - Call Theta = (-(S·φ(d₁)·σ)/(2√T) - r·K·e^(-rT)·N(d₂)) / 365
    /// - Put Theta = (-(S·φ(d₁)·σ)/(2√T) + r·K·e^(-rT)·N(-d₂)) / 365
    /// - Call Rho = T·K·e^(-rT)·N(d₂) / 100
    /// - Put Rho = -T·K·e^(-rT)·N(-d₂) / 100
    pub fn price_and_greeks(&self, strike: f64, expiry: f64, kind: OptionKind) -> (f64, Greeks) {
        let terms = self.terms(strike, expiry);
        self.evaluate_terms(&terms, kind)
    }

    /// Evaluates price and Greeks from precomputed terms.
    pub fn evaluate_terms(&self, terms: &BlackScholesTerms, kind: OptionKind) -> (f64, Greeks) {
        let s = self.spot;
        let r = self.rate;
        let vol = self.volatility;
        let t = terms.time_to_expiry;
        let sqrt_t = terms.sqrt_t;
        let kd = terms.discounted_strike;

        let pdf_d1 = norm_pdf(terms.d1);
        let cdf_d1 = norm_cdf(terms.d1);

        let gamma = pdf_d1 / (s * vol * sqrt_t);
        let vega = s * pdf_d1 * sqrt_t;

        // Common term: -(S·φ(d₁)·σ)/(2√T)
        let decay = -s * pdf_d1 * vol / (2.0 * sqrt_t);

        let (price, delta, theta, rho) = match kind {
            OptionKind::Call => {
                let cdf_d2 = norm_cdf(terms.d2);
                (
                    s * cdf_d1 - kd * cdf_d2,
                    cdf_d1,
                    decay - r * kd * cdf_d2,
                    t * kd * cdf_d2,
                )
            }
            OptionKind::Put => {
                let cdf_neg_d2 = norm_cdf(-terms.d2);
                (
                    kd * cdf_neg_d2 - s * norm_cdf(-terms.d1),
                    cdf_d1 - 1.0,
                    decay + r * kd * cdf_neg_d2,
                    -t * kd * cdf_neg_d2,
                )
            }
        };

        let greeks = Greeks {
            delta,
            gamma,
            vega: vega / PERCENT,
            theta: theta / DAYS_PER_YEAR,
            rho: rho / PERCENT,
        };

        (price, greeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn atm_model() -> BlackScholes {
        BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap()
    }

    // ==========================================================
    // Constructor Tests
    // ==========================================================

    #[test]
    fn test_new_valid_parameters() {
        let bs = BlackScholes::new(100.0, 0.05, 0.01, 0.2).unwrap();
        assert_eq!(bs.spot(), 100.0);
        assert_eq!(bs.rate(), 0.05);
        assert_eq!(bs.dividend(), 0.01);
        assert_eq!(bs.volatility(), 0.2);
    }

    #[test]
    fn test_new_invalid_spot_negative() {
        match BlackScholes::new(-100.0, 0.05, 0.0, 0.2) {
            Err(AnalyticalError::InvalidSpot { spot }) => assert_eq!(spot, -100.0),
            other => panic!("Expected InvalidSpot error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_invalid_spot_zero_and_nan() {
        for spot in [0.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                BlackScholes::new(spot, 0.05, 0.0, 0.2),
                Err(AnalyticalError::InvalidSpot { .. })
            ));
        }
    }

    #[test]
    fn test_new_invalid_volatility() {
        for volatility in [-0.2, 0.0, f64::NAN] {
            assert!(matches!(
                BlackScholes::new(100.0, 0.05, 0.0, volatility),
                Err(AnalyticalError::InvalidVolatility { .. })
            ));
        }
    }

    #[test]
    fn test_new_invalid_rate_and_dividend() {
        assert!(matches!(
            BlackScholes::new(100.0, f64::NAN, 0.0, 0.2),
            Err(AnalyticalError::InvalidRate { .. })
        ));
        assert!(matches!(
            BlackScholes::new(100.0, 0.05, f64::NEG_INFINITY, 0.2),
            Err(AnalyticalError::InvalidDividend { .. })
        ));
    }

    #[test]
    fn test_new_negative_rate_and_dividend_allowed() {
        assert!(BlackScholes::new(100.0, -0.02, -0.01, 0.2).is_ok());
    }

    #[test]
    fn test_new_unchecked_keeps_invalid_values() {
        let bs = BlackScholes::new_unchecked(-1.0, 0.0, 0.0, 0.0);
        assert_eq!(bs.spot(), -1.0);
        assert!(bs.price(100.0, 1.0, OptionKind::Call).is_nan());
    }

    // ==========================================================
    // d1/d2 Tests
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2
        let bs = BlackScholes::new(100.0, 0.0, 0.0, 0.2).unwrap();
        assert_relative_eq!(bs.d1(100.0, 1.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(bs.d2(100.0, 1.0), -0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_d2_relationship() {
        let bs = BlackScholes::new(100.0, 0.05, 0.02, 0.2).unwrap();
        let terms = bs.terms(105.0, 0.5);
        assert_relative_eq!(terms.d2, terms.d1 - 0.2 * 0.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(terms.sqrt_t, 0.5_f64.sqrt(), epsilon = 1e-15);
        assert_eq!(terms.time_to_expiry, 0.5);
    }

    #[test]
    fn test_dividend_lowers_d1() {
        let no_div = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
        let with_div = BlackScholes::new(100.0, 0.05, 0.03, 0.2).unwrap();
        // q shifts d1 by -q·√T/σ
        let shift = no_div.d1(100.0, 1.0) - with_div.d1(100.0, 1.0);
        assert_relative_eq!(shift, 0.03 / 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_discounted_strike() {
        let terms = atm_model().terms(100.0, 1.0);
        assert_relative_eq!(terms.discounted_strike, 95.1229424500714, epsilon = 1e-12);
    }

    #[test]
    fn test_d1_moneyness_sign() {
        let bs = BlackScholes::new(150.0, 0.05, 0.0, 0.2).unwrap();
        assert!(bs.d1(100.0, 1.0) > 1.0);
        let bs = BlackScholes::new(50.0, 0.05, 0.0, 0.2).unwrap();
        assert!(bs.d1(100.0, 1.0) < -1.0);
    }

    // ==========================================================
    // Price Tests
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // S=100, K=100, r=5%, σ=20%, T=1: C ≈ 10.4506
        let price = atm_model().price(100.0, 1.0, OptionKind::Call);
        assert_relative_eq!(price, 10.450583572185565, epsilon = 1e-10);
    }

    #[test]
    fn test_put_price_reference_value() {
        // S=100, K=100, r=5%, σ=20%, T=1: P ≈ 5.5735
        let price = atm_model().price(100.0, 1.0, OptionKind::Put);
        assert_relative_eq!(price, 5.573526022256971, epsilon = 1e-10);
    }

    #[test]
    fn test_reference_values_with_dividend() {
        // S=100, K=95, r=3%, σ=25%, q=2%, T=0.5
        let bs = BlackScholes::new(100.0, 0.03, 0.02, 0.25).unwrap();
        let (call, call_greeks) = bs.price_and_greeks(95.0, 0.5, OptionKind::Call);
        let (put, put_greeks) = bs.price_and_greeks(95.0, 0.5, OptionKind::Put);

        assert_relative_eq!(call, 10.486604048853778, epsilon = 1e-9);
        assert_relative_eq!(put, 4.07223831114473, epsilon = 1e-9);
        assert_relative_eq!(call_greeks.delta, 0.65793405522106, epsilon = 1e-10);
        assert_relative_eq!(call_greeks.theta, -0.02233272744206042, epsilon = 1e-10);
        assert_relative_eq!(call_greeks.rho, 0.2765340073662611, epsilon = 1e-10);
        assert_relative_eq!(put_greeks.theta, -0.01464075750269404, epsilon = 1e-10);
        assert_relative_eq!(put_greeks.rho, -0.19139416394519365, epsilon = 1e-10);
    }

    #[test]
    fn test_deep_itm_call() {
        let bs = BlackScholes::new(200.0, 0.05, 0.0, 0.2).unwrap();
        let price = bs.price(100.0, 1.0, OptionKind::Call);
        let lower_bound = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(price >= lower_bound - 1e-10);
    }

    #[test]
    fn test_deep_otm_call() {
        let bs = BlackScholes::new(50.0, 0.05, 0.0, 0.2).unwrap();
        assert!(bs.price(100.0, 1.0, OptionKind::Call) < 0.01);
    }

    #[test]
    fn test_short_expiry_approaches_intrinsic() {
        let expiry = 1e-8;
        for (spot, strike) in [(110.0, 100.0), (90.0, 100.0), (100.0, 120.0), (130.0, 120.0)] {
            let bs = BlackScholes::new(spot, 0.05, 0.0, 0.2).unwrap();
            for kind in [OptionKind::Call, OptionKind::Put] {
                assert_relative_eq!(
                    bs.price(strike, expiry, kind),
                    kind.intrinsic(spot, strike),
                    epsilon = 1e-5
                );
            }
        }
    }

    #[test]
    fn test_zero_expiry_is_undefined() {
        // The kernel divides by √T; callers must validate T > 0
        let (price, greeks) = atm_model().price_and_greeks(100.0, 0.0, OptionKind::Call);
        assert!(price.is_nan());
        assert!(greeks.gamma.is_nan());
    }

    // ==========================================================
    // Put-Call Parity Tests
    // ==========================================================

    #[test]
    fn test_put_call_parity_various_strikes() {
        let bs = atm_model();
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let call = bs.price(strike, 1.0, OptionKind::Call);
            let put = bs.price(strike, 1.0, OptionKind::Put);
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_various_expiries() {
        let bs = atm_model();
        for expiry in [0.25, 0.5, 1.0, 2.0] {
            let call = bs.price(100.0, expiry, OptionKind::Call);
            let put = bs.price(100.0, expiry, OptionKind::Put);
            let forward = 100.0 - 100.0 * (-0.05 * expiry).exp();
            assert_relative_eq!(call - put, forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let bs = BlackScholes::new(100.0, -0.02, 0.0, 0.2).unwrap();
        let call = bs.price(100.0, 1.0, OptionKind::Call);
        let put = bs.price(100.0, 1.0, OptionKind::Put);
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    #[test]
    fn test_put_call_difference_ignores_dividend() {
        // No e^(-qT) factor on S: C - P = S - K·e^(-rT) for any q
        let bs = BlackScholes::new(100.0, 0.05, 0.04, 0.3).unwrap();
        let call = bs.price(90.0, 1.5, OptionKind::Call);
        let put = bs.price(90.0, 1.5, OptionKind::Put);
        let forward = 100.0 - 90.0 * (-0.05_f64 * 1.5).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-10);
    }

    // ==========================================================
    // Greeks Tests
    // ==========================================================

    #[test]
    fn test_reference_greeks_call() {
        let greeks = atm_model().greeks(100.0, 1.0, OptionKind::Call);
        assert_relative_eq!(greeks.delta, 0.6368306511756191, epsilon = 1e-12);
        assert_relative_eq!(greeks.gamma, 0.018762017345846895, epsilon = 1e-12);
        assert_relative_eq!(greeks.vega, 0.3752403469169379, epsilon = 1e-12);
        assert_relative_eq!(greeks.theta, -0.01757267820941972, epsilon = 1e-12);
        assert_relative_eq!(greeks.rho, 0.5323248154537634, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_greeks_put() {
        let greeks = atm_model().greeks(100.0, 1.0, OptionKind::Put);
        assert_relative_eq!(greeks.delta, -0.3631693488243809, epsilon = 1e-12);
        assert_relative_eq!(greeks.gamma, 0.018762017345846895, epsilon = 1e-12);
        assert_relative_eq!(greeks.vega, 0.3752403469169379, epsilon = 1e-12);
        assert_relative_eq!(greeks.theta, -0.004542138147766099, epsilon = 1e-12);
        assert_relative_eq!(greeks.rho, -0.4189046090469506, epsilon = 1e-12);
    }

    #[test]
    fn test_delta_bounds() {
        let bs = atm_model();
        for strike in [50.0, 80.0, 100.0, 120.0, 200.0] {
            let call = bs.greeks(strike, 1.0, OptionKind::Call).delta;
            let put = bs.greeks(strike, 1.0, OptionKind::Put).delta;
            assert!((0.0..=1.0).contains(&call), "call delta {} at K={}", call, strike);
            assert!((-1.0..=0.0).contains(&put), "put delta {} at K={}", put, strike);
            assert_relative_eq!(put, call - 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gamma_vega_identical_for_call_and_put() {
        let bs = BlackScholes::new(100.0, 0.03, 0.01, 0.35).unwrap();
        for strike in [80.0, 100.0, 125.0] {
            let call = bs.greeks(strike, 0.75, OptionKind::Call);
            let put = bs.greeks(strike, 0.75, OptionKind::Put);
            assert_eq!(call.gamma, put.gamma);
            assert_eq!(call.vega, put.vega);
        }
    }

    #[test]
    fn test_gamma_maximum_near_atm() {
        let bs = atm_model();
        let gamma_atm = bs.greeks(100.0, 1.0, OptionKind::Call).gamma;
        assert!(gamma_atm >= bs.greeks(80.0, 1.0, OptionKind::Call).gamma);
        assert!(gamma_atm >= bs.greeks(120.0, 1.0, OptionKind::Call).gamma);
    }

    #[test]
    fn test_theta_and_rho_signs() {
        let bs = atm_model();
        let call = bs.greeks(100.0, 1.0, OptionKind::Call);
        let put = bs.greeks(100.0, 1.0, OptionKind::Put);
        assert!(call.theta < 0.0);
        assert!(call.rho > 0.0);
        assert!(put.rho < 0.0);
    }

    // ==========================================================
    // Greeks vs Finite Difference Tests
    // ==========================================================

    #[test]
    fn test_delta_vs_finite_diff() {
        let h = 0.01;
        let up = BlackScholes::new(100.0 + h, 0.05, 0.0, 0.2).unwrap();
        let dn = BlackScholes::new(100.0 - h, 0.05, 0.0, 0.2).unwrap();

        for kind in [OptionKind::Call, OptionKind::Put] {
            let fd = (up.price(100.0, 1.0, kind) - dn.price(100.0, 1.0, kind)) / (2.0 * h);
            assert_relative_eq!(atm_model().greeks(100.0, 1.0, kind).delta, fd, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let h = 0.01;
        let bs = atm_model();
        let up = BlackScholes::new(100.0 + h, 0.05, 0.0, 0.2).unwrap();
        let dn = BlackScholes::new(100.0 - h, 0.05, 0.0, 0.2).unwrap();

        let kind = OptionKind::Call;
        let fd = (up.price(100.0, 1.0, kind) - 2.0 * bs.price(100.0, 1.0, kind)
            + dn.price(100.0, 1.0, kind))
            / (h * h);
        assert_relative_eq!(bs.greeks(100.0, 1.0, kind).gamma, fd, epsilon = 1e-5);
    }

    #[test]
    fn test_vega_vs_finite_diff_per_vol_point() {
        // One volatility point = 0.01 in decimal terms
        let h = 0.0001;
        let up = BlackScholes::new(100.0, 0.05, 0.0, 0.2 + h).unwrap();
        let dn = BlackScholes::new(100.0, 0.05, 0.0, 0.2 - h).unwrap();

        let kind = OptionKind::Put;
        let fd = (up.price(100.0, 1.0, kind) - dn.price(100.0, 1.0, kind)) / (2.0 * h);
        let vega = atm_model().greeks(100.0, 1.0, kind).vega;
        assert_relative_eq!(vega, fd / PERCENT, epsilon = 1e-7);
    }

    #[test]
    fn test_rho_vs_finite_diff_per_rate_point() {
        let h = 0.0001;
        let up = BlackScholes::new(100.0, 0.05 + h, 0.0, 0.2).unwrap();
        let dn = BlackScholes::new(100.0, 0.05 - h, 0.0, 0.2).unwrap();

        for kind in [OptionKind::Call, OptionKind::Put] {
            let fd = (up.price(100.0, 1.0, kind) - dn.price(100.0, 1.0, kind)) / (2.0 * h);
            let rho = atm_model().greeks(100.0, 1.0, kind).rho;
            assert_relative_eq!(rho, fd / PERCENT, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_theta_vs_finite_diff_per_day() {
        let h = 1e-5;
        let bs = atm_model();

        for kind in [OptionKind::Call, OptionKind::Put] {
            // Theta is the decay as expiry approaches: -∂V/∂T
            let fd = -(bs.price(100.0, 1.0 + h, kind) - bs.price(100.0, 1.0 - h, kind)) / (2.0 * h);
            assert_relative_eq!(
                bs.greeks(100.0, 1.0, kind).theta,
                fd / DAYS_PER_YEAR,
                epsilon = 1e-7
            );
        }
    }

    #[test]
    fn test_evaluate_terms_matches_price_and_greeks() {
        let bs = BlackScholes::new(102.0, 0.04, 0.01, 0.27).unwrap();
        let terms = bs.terms(98.0, 0.3);
        assert_eq!(
            bs.evaluate_terms(&terms, OptionKind::Put),
            bs.price_and_greeks(98.0, 0.3, OptionKind::Put)
        );
    }
}

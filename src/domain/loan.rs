//! Annuity loan calculator behind the credit page.
//!
//! The pure functions accept any input the annuity formula is defined for and
//! reject the rest with [`LoanError`]. Slider bounds are enforced by
//! [`LoanParams`], which clamps setter input and snaps it to the slider step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("principal must be a finite, non-negative amount (got {0})")]
    InvalidPrincipal(f64),
    #[error("loan term must be at least one month")]
    InvalidTerm,
    #[error("interest rate must be a finite, non-negative percentage (got {0})")]
    InvalidRate(f64),
    #[error("loan figures overflow for these inputs")]
    NonFinitePayment,
    #[error("{field} {value} is outside [{min}, {max}]")]
    OutOfBounds {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Range and step of one calculator slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderBounds {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Clamps into range, then rounds to the nearest step above `min`.
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    fn check(&self, field: &'static str, value: f64) -> Result<(), LoanError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(LoanError::OutOfBounds {
                field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub struct LoanBounds;

impl LoanBounds {
    pub const PRINCIPAL: SliderBounds = SliderBounds {
        min: 500_000.0,
        max: 15_000_000.0,
        step: 100_000.0,
    };
    pub const TERM_MONTHS: SliderBounds = SliderBounds {
        min: 12.0,
        max: 84.0,
        step: 12.0,
    };
    pub const RATE_PERCENT: SliderBounds = SliderBounds {
        min: 5.0,
        max: 25.0,
        step: 0.5,
    };
}

fn check_inputs(
    principal: f64,
    term_months: u32,
    annual_rate_percent: f64,
) -> Result<(), LoanError> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(LoanError::InvalidPrincipal(principal));
    }
    if term_months == 0 {
        return Err(LoanError::InvalidTerm);
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(LoanError::InvalidRate(annual_rate_percent));
    }
    Ok(())
}

/// Level monthly payment, unrounded.
///
/// `M = P * i * (1+i)^n / ((1+i)^n - 1)` with `i = r / 100 / 12`, evaluated as
/// `P * i / (1 - (1+i)^-n)` through `ln_1p`/`exp_m1` so tiny rates and long
/// terms stay finite. A rate too small to register degenerates to `P / n`.
pub fn monthly_payment(
    principal: f64,
    term_months: u32,
    annual_rate_percent: f64,
) -> Result<f64, LoanError> {
    check_inputs(principal, term_months, annual_rate_percent)?;

    let n = term_months as f64;
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;
    if monthly_rate == 0.0 {
        return Ok(principal / n);
    }

    // 1 - (1+i)^-n
    let discount = -(-n * monthly_rate.ln_1p()).exp_m1();
    let payment = if discount == 0.0 {
        principal / n
    } else {
        principal * monthly_rate / discount
    };

    if payment.is_finite() {
        Ok(payment)
    } else {
        Err(LoanError::NonFinitePayment)
    }
}

pub fn total_paid(
    principal: f64,
    term_months: u32,
    annual_rate_percent: f64,
) -> Result<f64, LoanError> {
    let monthly = monthly_payment(principal, term_months, annual_rate_percent)?;
    let total = monthly * term_months as f64;
    if total.is_finite() {
        Ok(total)
    } else {
        Err(LoanError::NonFinitePayment)
    }
}

/// Interest paid over the life of the loan.
pub fn overpayment(
    principal: f64,
    term_months: u32,
    annual_rate_percent: f64,
) -> Result<f64, LoanError> {
    total_paid(principal, term_months, annual_rate_percent).map(|total| total - principal)
}

/// Calculator slider state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanParams {
    pub principal: u64,
    pub term_months: u32,
    pub annual_rate_percent: f64,
}

impl Default for LoanParams {
    fn default() -> Self {
        Self {
            principal: 5_000_000,
            term_months: 60,
            annual_rate_percent: 12.0,
        }
    }
}

impl LoanParams {
    /// Strict constructor: every field must sit inside its slider range.
    pub fn new(
        principal: u64,
        term_months: u32,
        annual_rate_percent: f64,
    ) -> Result<Self, LoanError> {
        LoanBounds::PRINCIPAL.check("principal", principal as f64)?;
        LoanBounds::TERM_MONTHS.check("term_months", term_months as f64)?;
        if annual_rate_percent.is_nan() {
            return Err(LoanError::InvalidRate(annual_rate_percent));
        }
        LoanBounds::RATE_PERCENT.check("annual_rate_percent", annual_rate_percent)?;
        Ok(Self {
            principal,
            term_months,
            annual_rate_percent,
        })
    }

    pub fn set_principal(&mut self, value: u64) -> u64 {
        self.principal = LoanBounds::PRINCIPAL.snap(value as f64) as u64;
        self.principal
    }

    pub fn set_term_months(&mut self, value: u32) -> u32 {
        self.term_months = LoanBounds::TERM_MONTHS.snap(value as f64) as u32;
        self.term_months
    }

    pub fn set_annual_rate_percent(&mut self, value: f64) -> f64 {
        self.annual_rate_percent = LoanBounds::RATE_PERCENT.snap(value);
        self.annual_rate_percent
    }

    /// Term expressed in years, as shown next to the term slider.
    pub fn term_years(&self) -> f64 {
        self.term_months as f64 / 12.0
    }

    pub fn quote(&self) -> Result<LoanQuote, LoanError> {
        LoanQuote::compute(self)
    }
}

/// Computed figures for one set of calculator inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub principal: u64,
    pub term_months: u32,
    pub annual_rate_percent: f64,
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub overpayment: f64,
}

impl LoanQuote {
    pub fn compute(params: &LoanParams) -> Result<Self, LoanError> {
        let principal = params.principal as f64;
        let monthly_payment =
            monthly_payment(principal, params.term_months, params.annual_rate_percent)?;
        let total_paid = total_paid(principal, params.term_months, params.annual_rate_percent)?;
        Ok(Self {
            principal: params.principal,
            term_months: params.term_months,
            annual_rate_percent: params.annual_rate_percent,
            monthly_payment,
            total_paid,
            overpayment: total_paid - principal,
        })
    }
}

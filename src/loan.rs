use chrono::{Months, NaiveDate};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FinancingError;

/// Inputs of one financing run.
///
/// Rates are fractions (`0.1166` is 11.66% a year). Monetary values share a
/// single abstract unit.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanParameters {
    pub property_value: f64,
    pub down_payment: f64,
    pub term_months: u32,
    pub annual_effective_rate: f64,
    pub extra_monthly_budget: f64,
    /// Due date of installment 1. Only used to label installments.
    #[cfg_attr(feature = "serde", serde(default))]
    pub first_payment_date: Option<NaiveDate>,
}

impl LoanParameters {
    pub fn new(
        property_value: f64,
        down_payment: f64,
        term_months: u32,
        annual_effective_rate: f64,
        extra_monthly_budget: f64,
    ) -> Self {
        Self {
            property_value,
            down_payment,
            term_months,
            annual_effective_rate,
            extra_monthly_budget,
            first_payment_date: None,
        }
    }

    pub fn with_first_payment_date(mut self, first_payment_date: NaiveDate) -> Self {
        self.first_payment_date = Some(first_payment_date);
        self
    }

    pub fn financed_amount(&self) -> f64 {
        self.property_value - self.down_payment
    }

    pub fn monthly_rate(&self) -> f64 {
        monthly_rate_from_annual(self.annual_effective_rate)
    }

    /// Due date of installment `index` (1-based), if a calendar is attached.
    pub fn due_date(&self, index: u32) -> Option<NaiveDate> {
        self.first_payment_date.and_then(|first| due_date(&first, index))
    }

    /// Checks every field before a run. Nothing is computed when this fails.
    pub fn validate(&self) -> Result<(), FinancingError> {
        if self.term_months < 1 {
            return Err(FinancingError::invalid(
                "term_months",
                "at least one installment is required",
            ));
        }
        non_negative("property_value", self.property_value)?;
        non_negative("down_payment", self.down_payment)?;
        non_negative("annual_effective_rate", self.annual_effective_rate)?;
        non_negative("extra_monthly_budget", self.extra_monthly_budget)?;

        let financed = self.financed_amount();
        if financed <= 0. {
            return Err(FinancingError::invalid(
                "down_payment",
                format!(
                    "down payment {} leaves nothing to finance on a property worth {}",
                    self.down_payment, self.property_value
                ),
            ));
        }

        let monthly_rate = self.monthly_rate();
        if !monthly_rate.is_finite() {
            return Err(FinancingError::invalid(
                "annual_effective_rate",
                format!("monthly rate for {} is not finite", self.annual_effective_rate),
            ));
        }

        if let Some(first) = self.first_payment_date {
            if due_date(&first, self.term_months).is_none() {
                return Err(FinancingError::invalid(
                    "first_payment_date",
                    format!(
                        "{} installments starting {} run past the supported calendar",
                        self.term_months, first
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for LoanParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "property {:.2}, down payment {:.2}, {} months at {:.4}% a year, extra budget {:.2}",
            self.property_value,
            self.down_payment,
            self.term_months,
            self.annual_effective_rate * 100.,
            self.extra_monthly_budget
        )
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), FinancingError> {
    if !value.is_finite() {
        Err(FinancingError::invalid(field, format!("{} is not a finite number", value)))
    } else if value < 0. {
        Err(FinancingError::invalid(field, format!("{} is negative", value)))
    } else {
        Ok(())
    }
}

/// Compound conversion of an annual effective rate to its monthly equivalent.
pub fn monthly_rate_from_annual(annual_rate: f64) -> f64 {
    (1. + annual_rate).powf(1. / 12.) - 1.
}

/// Compound conversion of a rate accrued over `months` to an annual rate.
pub fn annualize(total_rate: f64, months: usize) -> f64 {
    let years = months as f64 / 12.;
    (1. + total_rate).powf(1. / years) - 1.
}

// installment dates are offsets from the first one so month-end days survive
// short months (Jan 31, Feb 29, Mar 31, ...)
fn due_date(&first: &NaiveDate, index: u32) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(index.saturating_sub(1)))
}

use chrono::NaiveDate;
use log::trace;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One period of a schedule.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Installment {
    /// 1-based period number.
    pub index: u32,
    pub due_date: Option<NaiveDate>,
    pub balance_before: f64,
    pub interest_due: f64,
    /// Scheduled amortization, floored to cents.
    pub principal_due: f64,
    /// Budget left after the contractual installment, applied to principal.
    pub extra_principal_paid: f64,
    /// `interest_due + principal_due`
    pub total_due: f64,
    /// `total_due + extra_principal_paid`
    pub total_paid_with_extra: f64,
    pub balance_after: f64,
}

impl Installment {
    pub(crate) fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }
}

impl fmt::Display for Installment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "installment {}", self.index)?;
        if let Some(date) = self.due_date {
            write!(f, ", date {}", date)?;
        }
        write!(
            f,
            ", interest {:.2}, principal {:.2}, extra {:.2}, paid {:.2}, ending balance {:.2}",
            self.interest_due,
            self.principal_due,
            self.extra_principal_paid,
            self.total_paid_with_extra,
            self.balance_after
        )
    }
}

/// Computes installment `index` of a `term_months` schedule from the balance
/// outstanding before it.
///
/// The scheduled principal spreads the balance evenly over the periods left
/// and is floored to cents, so rounding never overpays principal. Interest is
/// kept at full precision. Whatever `extra_budget` leaves after the
/// contractual installment goes to principal, capped at `balance_before`.
///
/// Inputs are expected to be validated already: `index >= 1`,
/// `term_months >= 1` and every amount non-negative.
pub fn compute_installment(
    index: u32,
    term_months: u32,
    extra_budget: f64,
    balance_before: f64,
    monthly_rate: f64,
) -> Installment {
    let remaining_periods = i64::from(term_months) - (i64::from(index) - 1);
    let principal_due = if remaining_periods <= 0 {
        0.
    } else {
        floor_cents(balance_before / remaining_periods as f64)
    };

    let interest_due = balance_before * monthly_rate;
    let total_due = principal_due + interest_due;

    let extra_principal_paid = if balance_before > 0. {
        (extra_budget - total_due).min(balance_before).max(0.)
    } else {
        0.
    };
    let total_paid_with_extra = total_due + extra_principal_paid;

    // two guarded deductions: an exhausted balance is never pushed below zero
    let mut balance_after = balance_before;
    if balance_after > 0. {
        balance_after -= principal_due;
    }
    if balance_after > 0. {
        balance_after = (balance_after - extra_principal_paid).max(0.);
    }

    trace!(
        "installment {}/{}: interest {}, principal {}, extra {}, end bal {}",
        index,
        term_months,
        interest_due,
        principal_due,
        extra_principal_paid,
        balance_after
    );

    Installment {
        index,
        due_date: None,
        balance_before,
        interest_due,
        principal_due,
        extra_principal_paid,
        total_due,
        total_paid_with_extra,
        balance_after,
    }
}

fn floor_cents(amt: f64) -> f64 {
    (amt * 100.).floor() / 100.
}

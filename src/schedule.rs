//! Baseline and accelerated schedules for one loan and the summary comparing
//! them.

use chrono::NaiveDate;
use log::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FinancingError;
use crate::installment::{compute_installment, Installment};
use crate::loan::{annualize, LoanParameters};

/// The accelerated schedule paid the loan off before the contractual term.
///
/// This is the expected outcome of a large enough extra budget, not an error.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EarlyPayoff {
    pub planned_months: u32,
    pub actual_months: u32,
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FinancingSummary {
    pub property_value: f64,
    pub down_payment: f64,
    pub financed_amount: f64,
    pub term_months: u32,
    pub annual_effective_rate: f64,
    pub monthly_rate: f64,
    pub extra_monthly_budget: f64,

    pub total_paid_baseline: f64,
    pub total_interest_baseline: f64,
    pub effective_cost_total_baseline: f64,
    pub effective_cost_annual_baseline: f64,
    pub payoff_date_baseline: Option<NaiveDate>,

    pub total_paid_accelerated: f64,
    pub total_interest_accelerated: f64,
    pub months_to_payoff_accelerated: u32,
    pub effective_cost_total_accelerated: f64,
    pub effective_cost_annual_accelerated: f64,
    pub payoff_date_accelerated: Option<NaiveDate>,

    pub amount_saved: f64,
    pub months_saved: u32,
}

/// Result of [`run_financing`]: the summary plus both installment sequences.
#[derive(Clone, PartialEq, Debug)]
pub struct Financing {
    summary: FinancingSummary,
    baseline: Vec<Installment>,
    accelerated: Vec<Installment>,
    early_payoff: Option<EarlyPayoff>,
}

impl Financing {
    pub fn summary(&self) -> &FinancingSummary {
        &self.summary
    }

    /// Contractual installments only, always `term_months` long.
    pub fn baseline(&self) -> &[Installment] {
        &self.baseline
    }

    /// Installments with the extra budget applied, ending at payoff.
    pub fn accelerated(&self) -> &[Installment] {
        &self.accelerated
    }

    pub fn early_payoff(&self) -> Option<EarlyPayoff> {
        self.early_payoff
    }

    pub fn into_summary(self) -> FinancingSummary {
        self.summary
    }
}

/// Runs both schedules for `params` and summarizes them.
///
/// The baseline pays the contractual installment for every period of the
/// term. The accelerated schedule starts from the same balance, adds the
/// extra budget each period and stops once the balance reaches zero.
pub fn run_financing(params: &LoanParameters) -> Result<Financing, FinancingError> {
    params.validate()?;

    let monthly_rate = params.monthly_rate();
    let financed_amount = params.financed_amount();
    let term_months = params.term_months;
    debug!("running financing: {}", params);

    let mut baseline: Vec<Installment> = Vec::with_capacity(term_months as usize);
    let mut accelerated: Vec<Installment> = Vec::new();
    let mut balance_baseline = financed_amount;
    let mut balance_accelerated = financed_amount;

    for index in 1..=term_months {
        let due_date = params.due_date(index);

        let inst = compute_installment(index, term_months, 0., balance_baseline, monthly_rate)
            .with_due_date(due_date);
        balance_baseline = inst.balance_after;
        baseline.push(inst);

        if balance_accelerated > 0. {
            let inst = compute_installment(
                index,
                term_months,
                params.extra_monthly_budget,
                balance_accelerated,
                monthly_rate,
            )
            .with_due_date(due_date);
            balance_accelerated = inst.balance_after;
            accelerated.push(inst);
        }
    }

    if baseline.len() != term_months as usize {
        return Err(FinancingError::InvariantViolation {
            expected: term_months,
            actual: baseline.len(),
        });
    }

    let early_payoff = if accelerated.len() != baseline.len() {
        let notice = EarlyPayoff {
            planned_months: term_months,
            actual_months: accelerated.len() as u32,
        };
        info!(
            "planned to pay in {} months, paid off in {} months",
            notice.planned_months, notice.actual_months
        );
        Some(notice)
    } else {
        None
    };

    let summary = summarize(params, monthly_rate, &baseline, &accelerated);
    debug!(
        "baseline paid {}, accelerated paid {}, saved {}",
        summary.total_paid_baseline, summary.total_paid_accelerated, summary.amount_saved
    );

    Ok(Financing {
        summary,
        baseline,
        accelerated,
        early_payoff,
    })
}

fn summarize(
    params: &LoanParameters,
    monthly_rate: f64,
    baseline: &[Installment],
    accelerated: &[Installment],
) -> FinancingSummary {
    let financed_amount = params.financed_amount();

    let total_paid_baseline: f64 = baseline.iter().map(|i| i.total_due).sum();
    let total_paid_accelerated: f64 = accelerated.iter().map(|i| i.total_paid_with_extra).sum();

    let effective_cost_total_baseline = effective_cost(total_paid_baseline, financed_amount);
    let effective_cost_total_accelerated = effective_cost(total_paid_accelerated, financed_amount);

    FinancingSummary {
        property_value: params.property_value,
        down_payment: params.down_payment,
        financed_amount,
        term_months: params.term_months,
        annual_effective_rate: params.annual_effective_rate,
        monthly_rate,
        extra_monthly_budget: params.extra_monthly_budget,

        total_paid_baseline,
        total_interest_baseline: baseline.iter().map(|i| i.interest_due).sum(),
        effective_cost_total_baseline,
        effective_cost_annual_baseline: annualize(effective_cost_total_baseline, baseline.len()),
        payoff_date_baseline: baseline.last().and_then(|i| i.due_date),

        total_paid_accelerated,
        total_interest_accelerated: accelerated.iter().map(|i| i.interest_due).sum(),
        months_to_payoff_accelerated: accelerated.len() as u32,
        effective_cost_total_accelerated,
        effective_cost_annual_accelerated: annualize(
            effective_cost_total_accelerated,
            accelerated.len(),
        ),
        payoff_date_accelerated: accelerated.last().and_then(|i| i.due_date),

        amount_saved: total_paid_baseline - total_paid_accelerated,
        months_saved: params.term_months - accelerated.len() as u32,
    }
}

fn effective_cost(total_paid: f64, financed_amount: f64) -> f64 {
    (total_paid - financed_amount) / financed_amount
}

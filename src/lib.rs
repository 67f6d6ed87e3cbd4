//! Loan amortization with a fixed monthly extra-amortization budget.
//!
//! [`run_financing`] builds two schedules for the same loan: a baseline that
//! pays only the contractual installment for the full term, and an
//! accelerated one that also directs whatever is left of a monthly budget to
//! principal. The resulting [`Financing`] exposes both installment sequences
//! and a [`FinancingSummary`] comparing them.

pub mod error;
pub mod installment;
pub mod loan;
pub mod report;
pub mod schedule;

pub use error::FinancingError;
pub use installment::{compute_installment, Installment};
pub use loan::LoanParameters;
pub use schedule::{run_financing, EarlyPayoff, Financing, FinancingSummary};

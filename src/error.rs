use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FinancingError {
    /// Rejected before any installment is computed.
    #[error("invalid loan parameter `{field}`: {reason}")]
    InvalidParameters { field: &'static str, reason: String },

    /// The baseline schedule did not cover the contractual term.
    #[error("baseline schedule has {actual} installments, expected {expected}")]
    InvariantViolation { expected: u32, actual: usize },
}

impl FinancingError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FinancingError::InvalidParameters {
            field,
            reason: reason.into(),
        }
    }
}

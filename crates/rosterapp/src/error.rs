use crate::model::EmployeeId;
use crate::store::Bucket;
use crate::validation::ValidationErrors;
use thiserror::Error;

/// A numeric input outside of its accepted range.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Bonus percent must be between 0 and 100, got {0}")]
    BonusPercent(i64),

    #[error("Bonus percent must be a whole number, got \"{0}\"")]
    BonusNotANumber(String),

    #[error("Threshold must be a non-negative whole number, got \"{0}\"")]
    Threshold(String),
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid employee: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Employee not found in {bucket}: {id}")]
    NotFound { id: EmployeeId, bucket: Bucket },

    #[error("{0}")]
    Range(#[from] RangeError),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("{0}")]
    Api(String),
}

impl RosterError {
    pub fn not_found(id: EmployeeId, bucket: Bucket) -> Self {
        RosterError::NotFound { id, bucket }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;

use chrono::NaiveDate;
use thiserror::Error;

/// Rejected input. The engine never corrects input silently; every variant is
/// surfaced to the caller as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid date '{0}': expected a calendar date in YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("Date of birth {birth} is after the cutoff date {cutoff}")]
    BirthAfterCutoff { birth: NaiveDate, cutoff: NaiveDate },

    #[error("{field} cannot be negative (got {value})")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("Sum of answers ({answered}) exceeds total questions ({total})")]
    SumExceedsTotal { answered: u64, total: u32 },

    #[error("{field} must be between 0 and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        max: f64,
    },

    #[error("Unknown exam: {0}")]
    UnknownExam(String),

    #[error("Unknown syllabus topic: {0}")]
    UnknownTopic(String),
}

impl ValidationError {
    /// Stable machine-readable code for this failure.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidDate(_) => "invalid_date",
            ValidationError::BirthAfterCutoff { .. } => "birth_after_cutoff",
            ValidationError::NegativeCount { .. } => "negative_count",
            ValidationError::SumExceedsTotal { .. } => "sum_exceeds_total",
            ValidationError::OutOfRange { .. } => "out_of_range",
            ValidationError::UnknownExam(_) => "unknown_exam",
            ValidationError::UnknownTopic(_) => "unknown_topic",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;

use serde::Deserialize;

use crate::eligibility::Category;
use crate::error::{Result, ValidationError};

// Counts arrive as signed integers so a negative value reaches validation
// instead of failing as a type mismatch.

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRequest {
    pub date_of_birth: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub cutoff_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpscRequest {
    pub date_of_birth: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default, alias = "usedAttempts")]
    pub attempts: i64,
    #[serde(default)]
    pub cutoff_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptsRequest {
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub used_attempts: i64,
    pub current_age: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityRequest {
    pub date_of_birth: String,
    #[serde(default)]
    pub category: Category,
    pub education: String,
    #[serde(default)]
    pub used_attempts: i64,
    #[serde(default)]
    pub cutoff_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRequest {
    pub exam: String,
    pub date_of_birth: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub cutoff_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub correct_answers: i64,
    pub wrong_answers: i64,
    #[serde(default)]
    pub total_questions: Option<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsatRequest {
    pub correct_answers: i64,
    pub wrong_answers: i64,
    #[serde(default)]
    pub not_attempted: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrelimsRequest {
    pub gs1_correct: i64,
    pub gs1_wrong: i64,
    pub csat_correct: i64,
    pub csat_wrong: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarksRequest {
    /// Accepted for form compatibility; prelims marks do not count towards merit
    #[serde(default)]
    pub prelims_marks: Option<f64>,
    pub mains_marks: f64,
    pub interview_marks: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyllabusRequest {
    #[serde(default)]
    pub completed: Vec<String>,
    #[serde(default)]
    pub toggle: Option<String>,
}

/// Convert a wire count into an engine count.
pub fn count(field: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(ValidationError::NegativeCount { field, value });
    }
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field,
        value: value as f64,
        max: u32::MAX as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_conversion() {
        assert_eq!(count("correctAnswers", 5).unwrap(), 5);
        assert_eq!(
            count("wrongAnswers", -1).unwrap_err(),
            ValidationError::NegativeCount {
                field: "wrongAnswers",
                value: -1
            }
        );
        assert!(count("wrongAnswers", i64::MAX).is_err());
    }

    #[test]
    fn test_upsc_request_defaults() {
        let req: UpscRequest = serde_json::from_str(r#"{"dateOfBirth": "2000-08-01"}"#).unwrap();
        assert_eq!(req.category, Category::General);
        assert_eq!(req.attempts, 0);
        assert!(req.cutoff_date.is_none());
    }

    #[test]
    fn test_upsc_request_accepts_used_attempts_alias() {
        let req: UpscRequest =
            serde_json::from_str(r#"{"dateOfBirth": "2000-08-01", "usedAttempts": 3}"#).unwrap();
        assert_eq!(req.attempts, 3);
    }
}

use serde::Serialize;

use super::config::{DEFAULT_MARKS_PER_CORRECT, DEFAULT_NEGATIVE_PER_WRONG};
use crate::error::{Result, ValidationError};

/// Marks gained per correct answer and lost per wrong answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkingScheme {
    pub marks_per_correct: f64,
    pub negative_per_wrong: f64,
}

impl MarkingScheme {
    pub fn gs_paper_1() -> Self {
        Self {
            marks_per_correct: DEFAULT_MARKS_PER_CORRECT,
            negative_per_wrong: DEFAULT_NEGATIVE_PER_WRONG,
        }
    }

    pub fn max_marks(&self, total_questions: u32) -> f64 {
        self.marks_per_correct * total_questions as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub positive_marks: f64,
    pub negative_marks: f64,
    pub total_marks: f64,
    pub unattempted: u32,
    pub accuracy: f64,
    pub attempted_questions: u32,
}

/// Score a negatively-marked paper.
///
/// Fails if `correct + wrong` exceeds `total_questions`. Accuracy is 0 when
/// nothing was attempted.
pub fn calculate_score(
    correct: u32,
    wrong: u32,
    total_questions: u32,
    scheme: &MarkingScheme,
) -> Result<ScoreBreakdown> {
    let attempted = correct as u64 + wrong as u64;
    if attempted > total_questions as u64 {
        return Err(ValidationError::SumExceedsTotal {
            answered: attempted,
            total: total_questions,
        });
    }
    let attempted = attempted as u32;

    let positive = correct as f64 * scheme.marks_per_correct;
    let negative = wrong as f64 * scheme.negative_per_wrong;
    let accuracy = if attempted == 0 {
        0.0
    } else {
        correct as f64 / attempted as f64 * 100.0
    };

    Ok(ScoreBreakdown {
        positive_marks: round2(positive),
        negative_marks: round2(negative),
        total_marks: round2(positive - negative),
        unattempted: total_questions - attempted,
        accuracy: round2(accuracy),
        attempted_questions: attempted,
    })
}

/// Round to 2 decimal places, halves upward.
///
/// Binary noise below 1e-6 of a hundredth is discarded first so that
/// 0.66 * 20 (13.200000000000001) lands on 13.2.
pub fn round2(value: f64) -> f64 {
    let hundredths = (value * 100.0 * 1e6).round() / 1e6;
    (hundredths + 0.5).floor() / 100.0
}

use serde::Serialize;

use super::engine::round2;
use crate::error::{Result, ValidationError};
use crate::syllabus::mains_total_marks;

pub const INTERVIEW_MAX_MARKS: u32 = 275;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarksBreakdown {
    pub mains: String,
    pub interview: String,
}

/// Final merit total. Prelims marks do not count towards it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalMarks {
    pub mains_score: f64,
    pub interview_score: f64,
    pub total_score: f64,
    pub total_possible: u32,
    pub percentage: f64,
    pub breakdown: MarksBreakdown,
}

pub fn calculate_final_marks(mains: f64, interview: f64) -> Result<FinalMarks> {
    let mains_max = mains_total_marks();
    check_range("mainsMarks", mains, mains_max)?;
    check_range("interviewMarks", interview, INTERVIEW_MAX_MARKS)?;

    let total_possible = mains_max + INTERVIEW_MAX_MARKS;
    let total_score = round2(mains + interview);

    Ok(FinalMarks {
        mains_score: round2(mains),
        interview_score: round2(interview),
        total_score,
        total_possible,
        percentage: round2(total_score / total_possible as f64 * 100.0),
        breakdown: MarksBreakdown {
            mains: format!("{}/{}", round2(mains), mains_max),
            interview: format!("{}/{}", round2(interview), INTERVIEW_MAX_MARKS),
        },
    })
}

fn check_range(field: &'static str, value: f64, max: u32) -> Result<()> {
    if !value.is_finite() || value < 0.0 || value > max as f64 {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            max: max as f64,
        });
    }
    Ok(())
}

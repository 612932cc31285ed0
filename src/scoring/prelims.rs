use serde::Serialize;

use super::config::ScoringConfig;
use super::engine::{calculate_score, round2, MarkingScheme, ScoreBreakdown};
use crate::error::{Result, ValidationError};

pub const CSAT_QUESTIONS: u32 = 80;
pub const CSAT_MARKS_PER_CORRECT: f64 = 2.5;
pub const CSAT_MAX_MARKS: f64 = 200.0;
/// 33% of the CSAT maximum
pub const CSAT_QUALIFYING_MARKS: f64 = 66.0;

/// CSAT (GS Paper II) result. The paper is qualifying only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsatResult {
    pub raw_score: f64,
    pub total_marks: f64,
    pub percentage: f64,
    pub qualified: bool,
    pub qualifying_marks: f64,
    pub correct_answers: u32,
    pub wrong_answers: u32,
    pub not_attempted: u32,
    pub message: String,
}

/// Combined GS Paper I and CSAT estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrelimsResult {
    pub gs1: ScoreBreakdown,
    pub gs1_score: f64,
    pub gs1_percentage: f64,
    pub gs1_cutoff: f64,
    pub csat: ScoreBreakdown,
    pub csat_score: f64,
    pub csat_percentage: f64,
    pub csat_qualified: bool,
    pub qualified: bool,
    pub message: String,
}

fn csat_scheme(config: &ScoringConfig) -> MarkingScheme {
    MarkingScheme {
        marks_per_correct: CSAT_MARKS_PER_CORRECT,
        negative_per_wrong: config.csat_negative_per_wrong(),
    }
}

/// Score CSAT from answer counts. The three counts together may not exceed
/// the 80 questions on the paper. The reported `not_attempted` is whatever the
/// paper leaves unanswered after `correct` and `wrong`.
pub fn evaluate_csat(
    correct: u32,
    wrong: u32,
    not_attempted: u32,
    config: &ScoringConfig,
) -> Result<CsatResult> {
    let answered = correct as u64 + wrong as u64 + not_attempted as u64;
    if answered > CSAT_QUESTIONS as u64 {
        return Err(ValidationError::SumExceedsTotal {
            answered,
            total: CSAT_QUESTIONS,
        });
    }

    let breakdown = calculate_score(correct, wrong, CSAT_QUESTIONS, &csat_scheme(config))?;
    let raw_score = breakdown.total_marks;
    let qualified = raw_score >= CSAT_QUALIFYING_MARKS;

    let message = if qualified {
        format!(
            "Congratulations! You have qualified CSAT with {} marks.",
            raw_score
        )
    } else {
        format!(
            "You need {} more marks to reach the CSAT qualifying mark of {}.",
            round2(CSAT_QUALIFYING_MARKS - raw_score),
            CSAT_QUALIFYING_MARKS
        )
    };

    Ok(CsatResult {
        raw_score,
        total_marks: CSAT_MAX_MARKS,
        percentage: round2(raw_score / CSAT_MAX_MARKS * 100.0),
        qualified,
        qualifying_marks: CSAT_QUALIFYING_MARKS,
        correct_answers: correct,
        wrong_answers: wrong,
        not_attempted: breakdown.unattempted,
        message,
    })
}

/// Score both prelims papers.
///
/// `qualified` requires CSAT to clear its qualifying mark and GS Paper I to
/// reach the configured expected cutoff.
pub fn evaluate_prelims(
    gs1_correct: u32,
    gs1_wrong: u32,
    csat_correct: u32,
    csat_wrong: u32,
    config: &ScoringConfig,
) -> Result<PrelimsResult> {
    let gs_scheme = config.gs_scheme();
    let gs_questions = config.total_questions();
    let gs1 = calculate_score(gs1_correct, gs1_wrong, gs_questions, &gs_scheme)?;
    let csat = calculate_score(csat_correct, csat_wrong, CSAT_QUESTIONS, &csat_scheme(config))?;

    let gs1_max = gs_scheme.max_marks(gs_questions);
    let gs1_cutoff = config.gs1_cutoff();
    let gs1_score = gs1.total_marks;
    let csat_score = csat.total_marks;
    let csat_qualified = csat_score >= CSAT_QUALIFYING_MARKS;
    let qualified = csat_qualified && gs1_score >= gs1_cutoff;

    let message = if !csat_qualified {
        format!(
            "CSAT not qualified ({} of {} needed). GS Paper I is not evaluated without qualifying CSAT.",
            csat_score, CSAT_QUALIFYING_MARKS
        )
    } else if !qualified {
        format!(
            "CSAT qualified, but GS Paper I score of {} is below the expected cutoff of {}.",
            gs1_score, gs1_cutoff
        )
    } else {
        format!(
            "CSAT qualified and GS Paper I score of {} meets the expected cutoff of {}.",
            gs1_score, gs1_cutoff
        )
    };

    Ok(PrelimsResult {
        gs1_percentage: if gs1_max > 0.0 {
            round2(gs1_score / gs1_max * 100.0)
        } else {
            0.0
        },
        gs1_score,
        gs1_cutoff,
        gs1,
        csat_percentage: round2(csat_score / CSAT_MAX_MARKS * 100.0),
        csat_score,
        csat_qualified,
        csat,
        qualified,
        message,
    })
}

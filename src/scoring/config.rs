use serde::{Deserialize, Serialize};

use super::engine::MarkingScheme;

pub const DEFAULT_MARKS_PER_CORRECT: f64 = 2.0;
/// One third of a GS Paper I mark, as the prelims score calculator deducts it.
/// The prelims marking table shows 0.67 instead; set `negative_per_wrong` to use that.
pub const DEFAULT_NEGATIVE_PER_WRONG: f64 = 0.66;
pub const DEFAULT_TOTAL_QUESTIONS: u32 = 100;
/// One third of a 2.5-mark CSAT question
pub const DEFAULT_CSAT_NEGATIVE_PER_WRONG: f64 = 0.83;
pub const DEFAULT_GS1_CUTOFF: f64 = 90.0;

/// Marking parameters.
///
/// Every field is optional; missing fields use the defaults above.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   negative_per_wrong: 0.67
///   total_questions: 100
///   gs1_cutoff: 95
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Marks awarded per correct GS Paper I answer (default: 2)
    #[serde(default)]
    pub marks_per_correct: Option<f64>,

    /// Marks deducted per wrong GS Paper I answer (default: 0.66)
    #[serde(default)]
    pub negative_per_wrong: Option<f64>,

    /// Questions in GS Paper I (default: 100)
    #[serde(default)]
    pub total_questions: Option<u32>,

    /// Marks deducted per wrong CSAT answer (default: 0.83)
    #[serde(default)]
    pub csat_negative_per_wrong: Option<f64>,

    /// Expected GS Paper I cutoff used to call a prelims result "qualified" (default: 90)
    #[serde(default)]
    pub gs1_cutoff: Option<f64>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            marks_per_correct: Some(DEFAULT_MARKS_PER_CORRECT),
            negative_per_wrong: Some(DEFAULT_NEGATIVE_PER_WRONG),
            total_questions: Some(DEFAULT_TOTAL_QUESTIONS),
            csat_negative_per_wrong: Some(DEFAULT_CSAT_NEGATIVE_PER_WRONG),
            gs1_cutoff: Some(DEFAULT_GS1_CUTOFF),
        }
    }
}

impl ScoringConfig {
    /// GS Paper I marking scheme with defaults filled in.
    pub fn gs_scheme(&self) -> MarkingScheme {
        MarkingScheme {
            marks_per_correct: self.marks_per_correct.unwrap_or(DEFAULT_MARKS_PER_CORRECT),
            negative_per_wrong: self.negative_per_wrong.unwrap_or(DEFAULT_NEGATIVE_PER_WRONG),
        }
    }

    pub fn total_questions(&self) -> u32 {
        self.total_questions.unwrap_or(DEFAULT_TOTAL_QUESTIONS)
    }

    pub fn csat_negative_per_wrong(&self) -> f64 {
        self.csat_negative_per_wrong
            .unwrap_or(DEFAULT_CSAT_NEGATIVE_PER_WRONG)
    }

    pub fn gs1_cutoff(&self) -> f64 {
        self.gs1_cutoff.unwrap_or(DEFAULT_GS1_CUTOFF)
    }
}

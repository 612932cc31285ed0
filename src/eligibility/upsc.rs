use chrono::NaiveDate;
use serde::Serialize;

use super::category::{AgeLimit, Attempts, Category};
use crate::age::{calculate_age, AgeBreakdown};
use crate::error::Result;

/// Outcome of the UPSC CSE age and attempt rules for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpscEligibility {
    pub eligible: bool,
    pub age_eligible: bool,
    pub attempts_eligible: bool,
    pub remaining_attempts: Attempts,
    pub age_limit: AgeLimit,
    pub attempt_limit: Attempts,
}

/// Age breakdown plus the UPSC rules applied to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub age: AgeBreakdown,
    pub category: Category,
    pub cutoff_date: NaiveDate,
    #[serde(flatten)]
    pub evaluation: UpscEligibility,
    pub message: String,
}

/// Apply the UPSC CSE age window and attempt limit for `category`.
pub fn evaluate_upsc(age_years: u32, category: Category, attempts_used: u32) -> UpscEligibility {
    let age_limit = category.age_limit();
    let attempt_limit = category.attempt_limit();

    let age_eligible = age_limit.contains(age_years);
    let attempts_eligible = attempt_limit.allows_after(attempts_used);

    UpscEligibility {
        eligible: age_eligible && attempts_eligible,
        age_eligible,
        attempts_eligible,
        remaining_attempts: attempt_limit.remaining_after(attempts_used),
        age_limit,
        attempt_limit,
    }
}

/// Compute age at `cutoff` and evaluate the UPSC rules against it.
pub fn check_upsc_eligibility(
    birth: NaiveDate,
    cutoff: NaiveDate,
    category: Category,
    attempts_used: u32,
) -> Result<EligibilityResult> {
    let age = calculate_age(birth, cutoff)?;
    let evaluation = evaluate_upsc(age.years, category, attempts_used);
    let message = upsc_message(&age, category, &evaluation);

    Ok(EligibilityResult {
        age,
        category,
        cutoff_date: cutoff,
        evaluation,
        message,
    })
}

fn upsc_message(age: &AgeBreakdown, category: Category, evaluation: &UpscEligibility) -> String {
    if evaluation.eligible {
        return "You are eligible for UPSC Civil Services Exam!".to_string();
    }

    let mut reasons = Vec::new();
    if !evaluation.age_eligible {
        reasons.push(format!(
            "age {} is outside the {} limit for {} category",
            age.years,
            evaluation.age_limit.label(),
            category.label()
        ));
    }
    if !evaluation.attempts_eligible {
        reasons.push(format!(
            "all {} attempts for {} category have been used",
            evaluation.attempt_limit,
            category.label()
        ));
    }

    format!(
        "You are not eligible for UPSC Civil Services Exam: {}",
        reasons.join("; ")
    )
}

use chrono::NaiveDate;
use serde::Serialize;

use super::category::Category;
use super::education::Qualification;
use super::upsc::evaluate_upsc;
use crate::age::{calculate_age, AgeBreakdown};
use crate::error::Result;

/// One independent criterion of the full eligibility check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Criterion {
    pub eligible: bool,
    pub message: String,
}

/// Age, education and attempts checked independently and combined.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullEligibility {
    pub age: AgeBreakdown,
    pub age_eligibility: Criterion,
    pub education_eligibility: Criterion,
    pub attempts_eligibility: Criterion,
    pub overall_eligible: bool,
    pub summary: String,
}

/// Run the age, education and attempts checks for UPSC CSE.
///
/// Each criterion is evaluated on its own; `overall_eligible` is their AND and
/// `summary` depends only on which criteria failed.
pub fn check_full_eligibility(
    birth: NaiveDate,
    cutoff: NaiveDate,
    category: Category,
    qualification: &Qualification,
    attempts_used: u32,
) -> Result<FullEligibility> {
    let age = calculate_age(birth, cutoff)?;
    let upsc = evaluate_upsc(age.years, category, attempts_used);

    let age_eligibility = Criterion {
        eligible: upsc.age_eligible,
        message: if upsc.age_eligible {
            format!(
                "Age {} is within the {} limit for {} category",
                age.years,
                upsc.age_limit.label(),
                category.label()
            )
        } else {
            format!(
                "Age {} is outside the {} limit for {} category",
                age.years,
                upsc.age_limit.label(),
                category.label()
            )
        },
    };

    let education_ok = qualification.is_degree();
    let education_eligibility = Criterion {
        eligible: education_ok,
        message: if education_ok {
            format!("{} meets the graduation requirement", qualification.label())
        } else {
            format!(
                "{} does not meet the graduation requirement (a Bachelor's degree or higher)",
                qualification.label()
            )
        },
    };

    let attempts_eligibility = Criterion {
        eligible: upsc.attempts_eligible,
        message: if upsc.attempt_limit.is_unlimited() {
            "Unlimited attempts within the age limit".to_string()
        } else if upsc.attempts_eligible {
            format!(
                "{} of {} attempts remaining",
                upsc.remaining_attempts, upsc.attempt_limit
            )
        } else {
            format!("All {} attempts have been used", upsc.attempt_limit)
        },
    };

    let overall_eligible =
        age_eligibility.eligible && education_eligibility.eligible && attempts_eligibility.eligible;
    let summary = summarize(
        age_eligibility.eligible,
        education_eligibility.eligible,
        attempts_eligibility.eligible,
    );

    Ok(FullEligibility {
        age,
        age_eligibility,
        education_eligibility,
        attempts_eligibility,
        overall_eligible,
        summary,
    })
}

fn summarize(age: bool, education: bool, attempts: bool) -> String {
    let failed: Vec<&str> = [(age, "age"), (education, "education"), (attempts, "attempts")]
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, name)| name)
        .collect();

    match failed.as_slice() {
        [] => "You meet all eligibility criteria for UPSC Civil Services Exam.".to_string(),
        [only] => format!("You do not meet the {} criterion for UPSC Civil Services Exam.", only),
        [first, second] => format!(
            "You do not meet the {} and {} criteria for UPSC Civil Services Exam.",
            first, second
        ),
        _ => "You do not meet any of the eligibility criteria for UPSC Civil Services Exam."
            .to_string(),
    }
}

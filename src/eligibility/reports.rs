use chrono::NaiveDate;
use serde::Serialize;

use super::category::{Attempts, Category};
use crate::age::calculate_age;
use crate::error::Result;

/// Age-only UPSC check, as shown by the age calculator screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeReport {
    pub current_age: u32,
    pub category: Category,
    pub eligible: bool,
    /// Whole years left before the upper age limit is passed (0 once beyond it)
    pub years_remaining: u32,
    pub age_limit: String,
    pub message: String,
}

/// Attempt-count UPSC check, as shown by the attempts calculator screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptsReport {
    pub category: Category,
    pub total_allowed: Attempts,
    pub used: u32,
    pub remaining: Attempts,
    pub eligible: bool,
    pub message: String,
}

pub fn age_report(birth: NaiveDate, cutoff: NaiveDate, category: Category) -> Result<AgeReport> {
    let age = calculate_age(birth, cutoff)?;
    let limit = category.age_limit();
    let current_age = age.years;
    let eligible = limit.contains(current_age);

    let message = if eligible {
        let left = limit.max - current_age;
        if left == 0 {
            "You are eligible. This is your final year within the age limit.".to_string()
        } else {
            format!(
                "You are eligible. You have {} more year{} within the age limit.",
                left,
                if left == 1 { "" } else { "s" }
            )
        }
    } else if current_age < limit.min {
        format!(
            "You need to be at least {} years old. You can apply in {} year{}.",
            limit.min,
            limit.min - current_age,
            if limit.min - current_age == 1 { "" } else { "s" }
        )
    } else {
        format!(
            "You have exceeded the maximum age limit of {} years for {} category.",
            limit.max,
            category.label()
        )
    };

    Ok(AgeReport {
        current_age,
        category,
        eligible,
        years_remaining: limit.max.saturating_sub(current_age),
        age_limit: limit.label(),
        message,
    })
}

/// Attempts left for `category`. Eligibility also requires `current_age`
/// to be inside the category's age window.
pub fn attempts_report(category: Category, used: u32, current_age: u32) -> AttemptsReport {
    let limit = category.attempt_limit();
    let age_limit = category.age_limit();
    let remaining = limit.remaining_after(used);
    let attempts_left = limit.allows_after(used);
    let age_ok = age_limit.contains(current_age);

    let message = if !attempts_left {
        format!(
            "You have used all {} attempts available for {} category.",
            limit,
            category.label()
        )
    } else if !age_ok {
        format!(
            "Attempts remain, but age {} is outside the {} limit for {} category.",
            current_age,
            age_limit.label(),
            category.label()
        )
    } else if limit.is_unlimited() {
        format!(
            "Unlimited attempts available until the age of {}.",
            age_limit.max
        )
    } else {
        format!("You have {} attempts remaining.", remaining)
    };

    AttemptsReport {
        category,
        total_allowed: limit,
        used,
        remaining,
        eligible: attempts_left && age_ok,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::parse_date;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn cutoff() -> NaiveDate {
        date("2025-08-01")
    }

    #[test]
    fn test_age_report_eligible() {
        let report = age_report(date("2000-08-01"), cutoff(), Category::General).unwrap();
        assert_eq!(report.current_age, 25);
        assert!(report.eligible);
        assert_eq!(report.years_remaining, 7);
        assert_eq!(report.age_limit, "21-32 years");
        assert!(report.message.contains("7 more years"));
    }

    #[test]
    fn test_age_report_too_young() {
        let report = age_report(date("2005-01-01"), cutoff(), Category::General).unwrap();
        assert_eq!(report.current_age, 20);
        assert!(!report.eligible);
        assert!(report.message.contains("in 1 year."));
    }

    #[test]
    fn test_age_report_over_limit() {
        let report = age_report(date("1989-01-01"), cutoff(), Category::Obc).unwrap();
        assert_eq!(report.current_age, 36);
        assert!(!report.eligible);
        assert_eq!(report.years_remaining, 0);
        assert!(report
            .message
            .contains("exceeded the maximum age limit of 35 years for OBC"));
    }

    #[test]
    fn test_age_report_upper_bound_inclusive() {
        let report = age_report(date("1990-01-01"), cutoff(), Category::Obc).unwrap();
        assert_eq!(report.current_age, 35);
        assert!(report.eligible);
        assert!(report.message.contains("final year"));
    }

    #[test]
    fn test_age_report_final_year() {
        let report = age_report(date("1993-08-01"), cutoff(), Category::General).unwrap();
        assert_eq!(report.current_age, 32);
        assert!(report.eligible);
        assert_eq!(report.years_remaining, 0);
        assert!(report.message.contains("final year"));
    }

    #[test]
    fn test_age_report_propagates_validation_error() {
        let err = age_report(date("2030-01-01"), cutoff(), Category::General).unwrap_err();
        assert_eq!(err.kind(), "birth_after_cutoff");
    }

    #[test]
    fn test_attempts_report_remaining() {
        let report = attempts_report(Category::General, 2, 25);
        assert!(report.eligible);
        assert_eq!(report.remaining, Attempts::Count(4));
        assert_eq!(report.message, "You have 4 attempts remaining.");
    }

    #[test]
    fn test_attempts_report_exhausted() {
        let report = attempts_report(Category::Obc, 9, 25);
        assert!(!report.eligible);
        assert_eq!(report.remaining, Attempts::Count(0));
        assert!(report.message.contains("all 9 attempts"));
    }

    #[test]
    fn test_attempts_report_age_still_applies() {
        let report = attempts_report(Category::General, 1, 40);
        assert!(!report.eligible);
        assert_eq!(report.remaining, Attempts::Count(5));
        assert!(report.message.contains("outside the 21-32 years limit"));
    }

    #[test]
    fn test_attempts_report_unlimited() {
        let report = attempts_report(Category::St, 15, 30);
        assert!(report.eligible);
        assert_eq!(report.remaining, Attempts::Unlimited);
        assert!(report.message.contains("until the age of 37"));
    }
}

use std::io::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::age::AgeBreakdown;
use crate::eligibility::{
    AgeReport, AttemptsReport, EligibilityResult, ExamEligibility, FullEligibility,
};
use crate::scoring::{performance_level, CsatResult, FinalMarks, PrelimsResult, ScoreBreakdown};
use crate::syllabus::{progress_percent, topic_id, SyllabusProgress, PRELIMS_SUBJECTS};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Pretty-printed JSON, same shape as the API responses
pub fn format_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Format an age breakdown as "25 years, 0 months, 0 days"
pub fn format_age(age: &AgeBreakdown) -> String {
    format!(
        "{} {}, {} {}, {} {}",
        age.years,
        plural(age.years, "year"),
        age.months,
        plural(age.months, "month"),
        age.days,
        plural(age.days, "day")
    )
}

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}

/// Pass/fail badge
fn verdict(ok: bool, yes: &str, no: &str, use_colors: bool) -> String {
    match (ok, use_colors) {
        (true, true) => yes.green().bold().to_string(),
        (false, true) => no.red().bold().to_string(),
        (true, false) => yes.to_string(),
        (false, false) => no.to_string(),
    }
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub fn format_age_report(report: &AgeReport, use_colors: bool) -> String {
    format!(
        "{}\n  Category: {}\n  Age limit: {}\n  Current age: {}\n  Years remaining: {}\n  {}",
        verdict(report.eligible, "ELIGIBLE", "NOT ELIGIBLE", use_colors),
        report.category,
        report.age_limit,
        report.current_age,
        report.years_remaining,
        report.message
    )
}

/// Format a UPSC check with age, limits and attempts
pub fn format_upsc(result: &EligibilityResult, use_colors: bool) -> String {
    let eval = &result.evaluation;
    let age = if use_colors {
        format_age(&result.age).cyan().to_string()
    } else {
        format_age(&result.age)
    };

    format!(
        "{}\n  Age on {}: {}\n  Category: {}\n  Age limit: {} ({})\n  Attempts: {} allowed, {} remaining ({})\n  {}",
        verdict(eval.eligible, "ELIGIBLE", "NOT ELIGIBLE", use_colors),
        result.cutoff_date,
        age,
        result.category,
        eval.age_limit.label(),
        verdict(eval.age_eligible, "ok", "fails", use_colors),
        eval.attempt_limit,
        eval.remaining_attempts,
        verdict(eval.attempts_eligible, "ok", "exhausted", use_colors),
        result.message
    )
}

pub fn format_attempts(report: &AttemptsReport, use_colors: bool) -> String {
    format!(
        "{}\n  Category: {}\n  Allowed: {}\n  Used: {}\n  Remaining: {}\n  {}",
        verdict(report.eligible, "ELIGIBLE", "NOT ELIGIBLE", use_colors),
        report.category,
        report.total_allowed,
        report.used,
        report.remaining,
        report.message
    )
}

/// Format the three-criterion check, one line per criterion
pub fn format_full_eligibility(result: &FullEligibility, use_colors: bool) -> String {
    let rows = [
        ("Age", &result.age_eligibility),
        ("Education", &result.education_eligibility),
        ("Attempts", &result.attempts_eligibility),
    ];

    let mut lines = vec![verdict(
        result.overall_eligible,
        "ELIGIBLE",
        "NOT ELIGIBLE",
        use_colors,
    )];
    lines.push(format!("  Age: {}", format_age(&result.age)));
    for (name, criterion) in rows {
        lines.push(format!(
            "  [{}] {}: {}",
            verdict(criterion.eligible, "x", " ", use_colors),
            name,
            criterion.message
        ));
    }
    lines.push(format!("  {}", result.summary));
    lines.join("\n")
}

pub fn format_exam(result: &ExamEligibility, use_colors: bool) -> String {
    format!(
        "{}: {}\n  Age on {}: {} (allowed {}-{})\n  Education: {} ({})\n  Attempts: {}\n  {}",
        heading(result.exam_name, use_colors),
        verdict(result.overall, "ELIGIBLE", "NOT ELIGIBLE", use_colors),
        result.cutoff_date,
        format_age(&result.age),
        result.min_age,
        result.max_age,
        result.education,
        verdict(result.education_eligible, "ok", "not met", use_colors),
        result.attempts,
        result.message
    )
}

/// Format a GS Paper I style score with its performance band
pub fn format_score_breakdown(score: &ScoreBreakdown, use_colors: bool) -> String {
    let total = if use_colors {
        score.total_marks.bold().to_string()
    } else {
        score.total_marks.to_string()
    };
    let negative = if use_colors {
        format!("-{}", score.negative_marks).red().to_string()
    } else {
        format!("-{}", score.negative_marks)
    };

    format!(
        "Total: {}\n  Positive: +{}\n  Negative: {}\n  Attempted: {} (unattempted {})\n  Accuracy: {}%\n  Performance: {}",
        total,
        score.positive_marks,
        negative,
        score.attempted_questions,
        score.unattempted,
        score.accuracy,
        performance_level(score.total_marks)
    )
}

pub fn format_csat(result: &CsatResult, use_colors: bool) -> String {
    format!(
        "CSAT: {}\n  Score: {}/{} ({}%)\n  Qualifying mark: {}\n  Answers: {} correct, {} wrong, {} not attempted\n  {}",
        verdict(result.qualified, "QUALIFIED", "NOT QUALIFIED", use_colors),
        result.raw_score,
        result.total_marks,
        result.percentage,
        result.qualifying_marks,
        result.correct_answers,
        result.wrong_answers,
        result.not_attempted,
        result.message
    )
}

pub fn format_prelims(result: &PrelimsResult, use_colors: bool) -> String {
    format!(
        "Prelims: {}\n  GS Paper I: {} ({}%, expected cutoff {}) {}\n  CSAT: {} ({}%) {}\n  {}",
        verdict(result.qualified, "QUALIFIED", "NOT QUALIFIED", use_colors),
        result.gs1_score,
        result.gs1_percentage,
        result.gs1_cutoff,
        verdict(result.gs1_score >= result.gs1_cutoff, "ok", "below cutoff", use_colors),
        result.csat_score,
        result.csat_percentage,
        verdict(result.csat_qualified, "ok", "not qualified", use_colors),
        result.message
    )
}

pub fn format_final_marks(result: &FinalMarks, use_colors: bool) -> String {
    format!(
        "Final merit: {}/{} ({}%)\n  Mains: {}\n  Interview: {}",
        heading(&result.total_score.to_string(), use_colors),
        result.total_possible,
        result.percentage,
        result.breakdown.mains,
        result.breakdown.interview
    )
}

/// Checklist of every prelims topic, grouped by subject
pub fn format_syllabus(progress: &SyllabusProgress, use_colors: bool) -> String {
    let mut lines = Vec::new();
    for subject in &PRELIMS_SUBJECTS {
        let done = (0..subject.topics.len())
            .filter(|i| progress.contains(&topic_id(subject, *i)))
            .count();
        lines.push(format!(
            "{} ({}/{})",
            heading(subject.name, use_colors),
            done,
            subject.topics.len()
        ));
        for (i, topic) in subject.topics.iter().enumerate() {
            let id = topic_id(subject, i);
            let mark = if progress.contains(&id) { "x" } else { " " };
            if use_colors {
                lines.push(format!("  [{}] {} {}", mark.green(), id.dimmed(), topic));
            } else {
                lines.push(format!("  [{}] {} {}", mark, id, topic));
            }
        }
    }
    lines.push(format!("Progress: {}%", progress_percent(progress)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::parse_date;
    use crate::eligibility::{
        age_report, attempts_report, check_exam, check_full_eligibility, check_upsc_eligibility,
        Category, Exam, Qualification,
    };
    use crate::scoring::{
        calculate_final_marks, calculate_score, evaluate_csat, evaluate_prelims, MarkingScheme,
        ScoringConfig,
    };
    use crate::syllabus::progress_from_ids;

    fn date(s: &str) -> chrono::NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_format_age() {
        let age = AgeBreakdown {
            years: 25,
            months: 1,
            days: 0,
        };
        assert_eq!(format_age(&age), "25 years, 1 month, 0 days");
    }

    #[test]
    fn test_format_upsc_plain() {
        let result =
            check_upsc_eligibility(date("2000-08-01"), date("2025-08-01"), Category::General, 2)
                .unwrap();
        let text = format_upsc(&result, false);
        assert!(text.starts_with("ELIGIBLE"));
        assert!(text.contains("Age on 2025-08-01: 25 years, 0 months, 0 days"));
        assert!(text.contains("Age limit: 21-32 years (ok)"));
        assert!(text.contains("Attempts: 6 allowed, 4 remaining (ok)"));
    }

    #[test]
    fn test_format_age_report_not_eligible() {
        let report = age_report(date("1985-01-01"), date("2025-08-01"), Category::General).unwrap();
        let text = format_age_report(&report, false);
        assert!(text.starts_with("NOT ELIGIBLE"));
        assert!(text.contains("Years remaining: 0"));
    }

    #[test]
    fn test_format_attempts_unlimited() {
        let report = attempts_report(Category::Sc, 15, 30);
        let text = format_attempts(&report, false);
        assert!(text.contains("Allowed: Unlimited"));
        assert!(text.contains("Remaining: Unlimited"));
    }

    #[test]
    fn test_format_full_eligibility_marks_failures() {
        let result = check_full_eligibility(
            date("2000-08-01"),
            date("2025-08-01"),
            Category::General,
            &Qualification::HigherSecondary,
            0,
        )
        .unwrap();
        let text = format_full_eligibility(&result, false);
        assert!(text.starts_with("NOT ELIGIBLE"));
        assert!(text.contains("[x] Age:"));
        assert!(text.contains("[ ] Education:"));
        assert!(text.contains("[x] Attempts:"));
    }

    #[test]
    fn test_format_exam() {
        let result = check_exam(
            Exam::SscCgl,
            date("2000-08-01"),
            date("2025-01-01"),
            Category::General,
            &Qualification::Bachelor,
        )
        .unwrap();
        let text = format_exam(&result, false);
        assert!(text.contains("ELIGIBLE"));
        assert!(text.contains("Age on 2025-01-01: 24 years"));
    }

    #[test]
    fn test_format_score_breakdown() {
        let score = calculate_score(50, 20, 100, &MarkingScheme::gs_paper_1()).unwrap();
        let text = format_score_breakdown(&score, false);
        assert!(text.starts_with("Total: 86.8"));
        assert!(text.contains("Negative: -13.2"));
        assert!(text.contains("Accuracy: 71.43%"));
        assert!(text.contains("Performance: Average"));
    }

    #[test]
    fn test_format_csat_and_prelims() {
        let config = ScoringConfig::default();
        let csat = evaluate_csat(20, 10, 50, &config).unwrap();
        assert!(format_csat(&csat, false).starts_with("CSAT: NOT QUALIFIED"));

        let prelims = evaluate_prelims(60, 20, 40, 10, &config).unwrap();
        let text = format_prelims(&prelims, false);
        assert!(text.starts_with("Prelims: QUALIFIED"));
        assert!(text.contains("GS Paper I: 106.8"));
    }

    #[test]
    fn test_format_final_marks() {
        let marks = calculate_final_marks(850.0, 180.0).unwrap();
        let text = format_final_marks(&marks, false);
        assert!(text.starts_with("Final merit: 1030/2025 (50.86%)"));
        assert!(text.contains("Mains: 850/1750"));
    }

    #[test]
    fn test_format_syllabus() {
        let progress = progress_from_ids(["p1-0", "p1-1", "p1-2"]).unwrap();
        let text = format_syllabus(&progress, false);
        assert!(text.contains("History of India (3/4)"));
        assert!(text.contains("  [x] p1-0 Ancient India"));
        assert!(text.contains("  [ ] p1-3 Indian National Movement"));
        assert!(text.ends_with("Progress: 10%"));
    }

    #[test]
    fn test_colors_only_when_requested() {
        let report = attempts_report(Category::General, 0, 25);
        assert!(!format_attempts(&report, false).contains('\u{1b}'));
        assert!(format_attempts(&report, true).contains('\u{1b}'));
    }

    #[test]
    fn test_format_json_matches_api_shape() {
        let score = calculate_score(50, 20, 100, &MarkingScheme::gs_paper_1()).unwrap();
        let json = format_json(&score).unwrap();
        assert!(json.contains("\"positiveMarks\": 100.0"));
        assert!(json.contains("\"attemptedQuestions\": 70"));
    }
}

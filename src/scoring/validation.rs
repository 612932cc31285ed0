use super::config::ScoringConfig;
use super::prelims::CSAT_MARKS_PER_CORRECT;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Validate marks_per_correct
    if let Some(marks) = config.marks_per_correct {
        if !marks.is_finite() || marks <= 0.0 {
            errors.push(format!(
                "scoring.marks_per_correct: must be positive (got {})",
                marks
            ));
        }
    }

    // Deduction must stay between nothing and a full correct answer
    let marks_per_correct = config.gs_scheme().marks_per_correct;
    if let Some(negative) = config.negative_per_wrong {
        if !negative.is_finite() || negative < 0.0 || negative > marks_per_correct {
            errors.push(format!(
                "scoring.negative_per_wrong: must be between 0 and {} (got {})",
                marks_per_correct, negative
            ));
        }
    }

    if let Some(negative) = config.csat_negative_per_wrong {
        if !negative.is_finite() || negative < 0.0 || negative > CSAT_MARKS_PER_CORRECT {
            errors.push(format!(
                "scoring.csat_negative_per_wrong: must be between 0 and {} (got {})",
                CSAT_MARKS_PER_CORRECT, negative
            ));
        }
    }

    if config.total_questions == Some(0) {
        errors.push("scoring.total_questions: must be at least 1".to_string());
    }

    // Validate gs1_cutoff against the paper's maximum
    if let Some(cutoff) = config.gs1_cutoff {
        let max = config.gs_scheme().max_marks(config.total_questions().max(1));
        if !cutoff.is_finite() || cutoff < 0.0 || cutoff > max {
            errors.push(format!(
                "scoring.gs1_cutoff: must be between 0 and {} (got {})",
                max, cutoff
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub mod formatter;

pub use formatter::{
    format_age, format_age_report, format_attempts, format_csat, format_exam, format_final_marks,
    format_full_eligibility, format_json, format_prelims, format_score_breakdown, format_syllabus,
    format_upsc, should_use_colors,
};

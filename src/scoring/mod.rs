pub mod config;
pub mod engine;
pub mod marks;
pub mod performance;
pub mod prelims;
pub mod validation;

pub use config::*;
pub use engine::{calculate_score, round2, MarkingScheme, ScoreBreakdown};
pub use marks::{calculate_final_marks, FinalMarks, MarksBreakdown};
pub use performance::{performance_level, PerformanceLevel};
pub use prelims::{evaluate_csat, evaluate_prelims, CsatResult, PrelimsResult};
pub use validation::validate_scoring;

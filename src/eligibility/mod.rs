pub mod category;
pub mod composite;
pub mod education;
pub mod exams;
pub mod reports;
pub mod upsc;

pub use category::{AgeLimit, Attempts, Category, RelaxationRow};
pub use composite::{check_full_eligibility, Criterion, FullEligibility};
pub use education::Qualification;
pub use exams::{check_exam, Exam, ExamEligibility, ExamProfile};
pub use reports::{age_report, attempts_report, AgeReport, AttemptsReport};
pub use upsc::{check_upsc_eligibility, evaluate_upsc, EligibilityResult, UpscEligibility};

use serde::Serialize;
use std::fmt;

/// Rough band for a GS Paper I score out of 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

pub fn performance_level(total_marks: f64) -> PerformanceLevel {
    if total_marks >= 110.0 {
        PerformanceLevel::Excellent
    } else if total_marks >= 90.0 {
        PerformanceLevel::Good
    } else if total_marks >= 70.0 {
        PerformanceLevel::Average
    } else {
        PerformanceLevel::NeedsImprovement
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Average => "Average",
            PerformanceLevel::NeedsImprovement => "Needs Improvement",
        };
        f.write_str(label)
    }
}

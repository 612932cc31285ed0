use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Exam cycle year used to build cutoff dates (default: 2025)
    #[serde(default)]
    pub exam_year: Option<i32>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Reservation/relaxation category. Selects the age and attempt limits.
///
/// Parsing never fails: unrecognised input falls back to `General`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Category {
    #[default]
    General,
    Obc,
    Sc,
    St,
    Ews,
    PwdGeneral,
    PwdObc,
    PwdScSt,
}

/// Inclusive age window in whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeLimit {
    pub min: u32,
    pub max: u32,
}

impl AgeLimit {
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && age <= self.max
    }

    /// Human-readable window, e.g. "21-32 years"
    pub fn label(&self) -> String {
        format!("{}-{} years", self.min, self.max)
    }
}

/// An attempt count or the "unlimited" sentinel.
///
/// Serialises as a plain number or the string `"unlimited"`, so an unlimited
/// category never reports arithmetic against infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempts {
    Count(u32),
    Unlimited,
}

impl Attempts {
    /// True if one more attempt is allowed after `used` attempts (strict less-than).
    pub fn allows_after(&self, used: u32) -> bool {
        match self {
            Attempts::Count(limit) => used < *limit,
            Attempts::Unlimited => true,
        }
    }

    /// Attempts left after `used`, floored at zero.
    pub fn remaining_after(&self, used: u32) -> Attempts {
        match self {
            Attempts::Count(limit) => Attempts::Count(limit.saturating_sub(used)),
            Attempts::Unlimited => Attempts::Unlimited,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        matches!(self, Attempts::Unlimited)
    }
}

impl fmt::Display for Attempts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attempts::Count(n) => write!(f, "{}", n),
            Attempts::Unlimited => write!(f, "Unlimited"),
        }
    }
}

impl Serialize for Attempts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Attempts::Count(n) => serializer.serialize_u32(*n),
            Attempts::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

/// Relaxation row used by the multi-exam table, which only distinguishes
/// General, OBC and SC/ST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelaxationRow {
    General,
    Obc,
    ScSt,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::General,
        Category::Obc,
        Category::Sc,
        Category::St,
        Category::Ews,
        Category::PwdGeneral,
        Category::PwdObc,
        Category::PwdScSt,
    ];

    /// Parse a category string, falling back to `General` for anything unrecognised.
    pub fn parse_or_default(input: &str) -> Self {
        let normalized = input
            .trim()
            .to_ascii_lowercase()
            .replace(['-', ' ', '/'], "_");

        match normalized.as_str() {
            "general" | "gen" | "ur" | "general_ur" => Category::General,
            "obc" | "obc_ncl" => Category::Obc,
            "sc" | "sc_st" => Category::Sc,
            "st" => Category::St,
            "ews" => Category::Ews,
            "pwd_general" | "pwd_ur" | "pwd" => Category::PwdGeneral,
            "pwd_obc" => Category::PwdObc,
            "pwd_sc_st" | "pwd_sc" | "pwd_st" => Category::PwdScSt,
            _ => Category::General,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Obc => "OBC",
            Category::Sc => "SC",
            Category::St => "ST",
            Category::Ews => "EWS",
            Category::PwdGeneral => "PwD (General)",
            Category::PwdObc => "PwD (OBC)",
            Category::PwdScSt => "PwD (SC/ST)",
        }
    }

    /// UPSC CSE age window for this category.
    pub fn age_limit(&self) -> AgeLimit {
        let max = match self {
            Category::General | Category::Ews => 32,
            Category::Obc => 35,
            Category::Sc | Category::St => 37,
            Category::PwdGeneral => 42,
            Category::PwdObc => 45,
            Category::PwdScSt => 47,
        };
        AgeLimit { min: 21, max }
    }

    /// UPSC CSE attempt limit for this category.
    pub fn attempt_limit(&self) -> Attempts {
        match self {
            Category::General | Category::Ews => Attempts::Count(6),
            Category::Obc | Category::PwdGeneral | Category::PwdObc => Attempts::Count(9),
            Category::Sc | Category::St | Category::PwdScSt => Attempts::Unlimited,
        }
    }

    pub fn relaxation_row(&self) -> RelaxationRow {
        match self {
            Category::Obc => RelaxationRow::Obc,
            Category::Sc | Category::St => RelaxationRow::ScSt,
            _ => RelaxationRow::General,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::parse_or_default(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::parse_or_default(&value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(Category::parse_or_default("general"), Category::General);
        assert_eq!(Category::parse_or_default("OBC"), Category::Obc);
        assert_eq!(Category::parse_or_default("sc"), Category::Sc);
        assert_eq!(Category::parse_or_default("st"), Category::St);
        assert_eq!(Category::parse_or_default("ews"), Category::Ews);
        assert_eq!(Category::parse_or_default("pwd_general"), Category::PwdGeneral);
        assert_eq!(Category::parse_or_default("pwd_obc"), Category::PwdObc);
        assert_eq!(Category::parse_or_default("pwd_sc_st"), Category::PwdScSt);
    }

    #[test]
    fn test_parse_sc_st_aliases() {
        assert_eq!(Category::parse_or_default("sc_st"), Category::Sc);
        assert_eq!(Category::parse_or_default("SC/ST"), Category::Sc);
        assert_eq!(Category::parse_or_default("pwd-sc-st"), Category::PwdScSt);
    }

    #[test]
    fn test_unknown_category_falls_back_to_general() {
        assert_eq!(Category::parse_or_default("martian"), Category::General);
        assert_eq!(Category::parse_or_default(""), Category::General);
    }

    #[test]
    fn test_deserialize_uses_fallback() {
        let c: Category = serde_json::from_str("\"obc\"").unwrap();
        assert_eq!(c, Category::Obc);
        let c: Category = serde_json::from_str("\"nobody\"").unwrap();
        assert_eq!(c, Category::General);
    }

    #[test]
    fn test_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::PwdScSt).unwrap(),
            "\"pwd_sc_st\""
        );
    }

    #[test]
    fn test_table_invariants() {
        for category in Category::ALL {
            let limit = category.age_limit();
            assert!(limit.max >= limit.min, "{:?}", category);
        }
    }

    #[test]
    fn test_attempts_serialization() {
        assert_eq!(serde_json::to_string(&Attempts::Count(6)).unwrap(), "6");
        assert_eq!(
            serde_json::to_string(&Attempts::Unlimited).unwrap(),
            "\"unlimited\""
        );
    }

    #[test]
    fn test_remaining_floors_at_zero() {
        assert_eq!(Attempts::Count(6).remaining_after(10), Attempts::Count(0));
        assert_eq!(Attempts::Count(6).remaining_after(2), Attempts::Count(4));
        assert_eq!(Attempts::Unlimited.remaining_after(u32::MAX), Attempts::Unlimited);
    }

    #[test]
    fn test_age_limit_label() {
        assert_eq!(Category::Obc.age_limit().label(), "21-35 years");
    }
}

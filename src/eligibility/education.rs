use serde::{Serialize, Serializer};
use std::fmt;

/// Highest completed qualification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Qualification {
    HigherSecondary,
    Diploma,
    Bachelor,
    Master,
    Professional,
    Doctorate,
    /// Anything unrecognised, kept verbatim for messages
    Other(String),
}

impl Qualification {
    pub fn parse(input: &str) -> Self {
        let normalized = input.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "higher_secondary" | "12th" | "hsc" | "intermediate" => Qualification::HigherSecondary,
            "diploma" | "iti" => Qualification::Diploma,
            "bachelor" | "bachelors" | "graduate" | "graduation" | "degree" => {
                Qualification::Bachelor
            }
            "master" | "masters" | "postgraduate" | "post_graduate" => Qualification::Master,
            "professional" => Qualification::Professional,
            "doctorate" | "phd" => Qualification::Doctorate,
            _ => Qualification::Other(input.trim().to_string()),
        }
    }

    /// Bachelor's degree or anything above it.
    pub fn is_degree(&self) -> bool {
        matches!(
            self,
            Qualification::Bachelor
                | Qualification::Master
                | Qualification::Professional
                | Qualification::Doctorate
        )
    }

    pub fn label(&self) -> &str {
        match self {
            Qualification::HigherSecondary => "Higher Secondary",
            Qualification::Diploma => "Diploma/ITI",
            Qualification::Bachelor => "Bachelor's Degree",
            Qualification::Master => "Master's Degree",
            Qualification::Professional => "Professional Degree",
            Qualification::Doctorate => "Doctorate",
            Qualification::Other(s) => s,
        }
    }

    fn key(&self) -> &str {
        match self {
            Qualification::HigherSecondary => "higher_secondary",
            Qualification::Diploma => "diploma",
            Qualification::Bachelor => "bachelor",
            Qualification::Master => "master",
            Qualification::Professional => "professional",
            Qualification::Doctorate => "doctorate",
            Qualification::Other(s) => s,
        }
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Qualification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Qualification::parse("graduate"), Qualification::Bachelor);
        assert_eq!(Qualification::parse("Bachelor"), Qualification::Bachelor);
        assert_eq!(Qualification::parse("postgraduate"), Qualification::Master);
        assert_eq!(Qualification::parse("PhD"), Qualification::Doctorate);
        assert_eq!(Qualification::parse("12th"), Qualification::HigherSecondary);
        assert_eq!(Qualification::parse("ITI"), Qualification::Diploma);
    }

    #[test]
    fn test_degree_membership() {
        assert!(Qualification::Bachelor.is_degree());
        assert!(Qualification::Doctorate.is_degree());
        assert!(!Qualification::HigherSecondary.is_degree());
        assert!(!Qualification::Diploma.is_degree());
        assert!(!Qualification::parse("astrology").is_degree());
    }

    #[test]
    fn test_unknown_kept_verbatim() {
        let q = Qualification::parse("  Basket Weaving ");
        assert_eq!(q, Qualification::Other("Basket Weaving".to_string()));
        assert_eq!(serde_json::to_string(&q).unwrap(), "\"Basket Weaving\"");
    }
}

use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;

use super::category::{Category, RelaxationRow};
use super::education::Qualification;
use crate::age::{calculate_age, parse_date, AgeBreakdown};
use crate::error::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Exam {
    UpscCse,
    SscCgl,
    SscChsl,
    SscMts,
    SscGd,
    IbpsPo,
    RrbNtpc,
}

/// Static age/education rules for one exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamProfile {
    pub name: &'static str,
    pub min_age: u32,
    pub max_general: u32,
    pub max_obc: u32,
    pub max_sc_st: u32,
    /// Month and day of the age cutoff within the exam year
    pub cutoff: (u32, u32),
    pub education: &'static str,
    pub accepts_diploma: bool,
    pub attempts: &'static str,
}

impl ExamProfile {
    pub fn max_age(&self, row: RelaxationRow) -> u32 {
        match row {
            RelaxationRow::General => self.max_general,
            RelaxationRow::Obc => self.max_obc,
            RelaxationRow::ScSt => self.max_sc_st,
        }
    }

    pub fn accepts(&self, qualification: &Qualification) -> bool {
        qualification.is_degree()
            || (self.accepts_diploma && *qualification == Qualification::Diploma)
    }
}

impl Exam {
    pub const ALL: [Exam; 7] = [
        Exam::UpscCse,
        Exam::SscCgl,
        Exam::SscChsl,
        Exam::SscMts,
        Exam::SscGd,
        Exam::IbpsPo,
        Exam::RrbNtpc,
    ];

    pub fn profile(&self) -> ExamProfile {
        match self {
            Exam::UpscCse => ExamProfile {
                name: "UPSC Civil Services",
                min_age: 21,
                max_general: 32,
                max_obc: 35,
                max_sc_st: 37,
                cutoff: (8, 1),
                education: "Bachelor's Degree",
                accepts_diploma: false,
                attempts: "6 (General), 9 (OBC), Unlimited (SC/ST)",
            },
            Exam::SscCgl => ssc("SSC CGL", 32),
            Exam::SscChsl => ssc("SSC CHSL", 27),
            Exam::SscMts => ssc("SSC MTS", 25),
            Exam::SscGd => ssc("SSC GD", 23),
            Exam::IbpsPo => ExamProfile {
                name: "IBPS PO",
                min_age: 20,
                max_general: 30,
                max_obc: 33,
                max_sc_st: 35,
                cutoff: (8, 1),
                education: "Bachelor's Degree",
                accepts_diploma: false,
                attempts: "No Limit",
            },
            Exam::RrbNtpc => ExamProfile {
                name: "RRB NTPC",
                min_age: 18,
                max_general: 33,
                max_obc: 36,
                max_sc_st: 38,
                cutoff: (8, 1),
                education: "Graduate/ITI",
                accepts_diploma: true,
                attempts: "No Limit",
            },
        }
    }

    /// Age cutoff date for the exam cycle held in `year`.
    pub fn cutoff_date(&self, year: i32) -> Result<NaiveDate> {
        let (month, day) = self.profile().cutoff;
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ValidationError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day))
        })
    }

    /// Parse `explicit` when given, otherwise fall back to this exam's cutoff in `year`.
    pub fn resolve_cutoff(&self, explicit: Option<&str>, year: i32) -> Result<NaiveDate> {
        match explicit {
            Some(date) => parse_date(date),
            None => self.cutoff_date(year),
        }
    }
}

// SSC exams share a minimum age, cutoff and a +3/+5 relaxation pattern
fn ssc(name: &'static str, max_general: u32) -> ExamProfile {
    ExamProfile {
        name,
        min_age: 18,
        max_general,
        max_obc: max_general + 3,
        max_sc_st: max_general + 5,
        cutoff: (1, 1),
        education: "Bachelor's Degree",
        accepts_diploma: false,
        attempts: "No Limit",
    }
}

impl FromStr for Exam {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "upsc" | "upsc_cse" | "cse" => Ok(Exam::UpscCse),
            "ssc" | "ssc_cgl" | "cgl" => Ok(Exam::SscCgl),
            "ssc_chsl" | "chsl" => Ok(Exam::SscChsl),
            "ssc_mts" | "mts" => Ok(Exam::SscMts),
            "ssc_gd" | "gd" => Ok(Exam::SscGd),
            "ibps" | "ibps_po" | "banking" => Ok(Exam::IbpsPo),
            "rrb" | "rrb_ntpc" | "railway" => Ok(Exam::RrbNtpc),
            _ => Err(ValidationError::UnknownExam(s.to_string())),
        }
    }
}

/// Age and education check for one of the supported exams.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamEligibility {
    pub exam: Exam,
    pub exam_name: &'static str,
    pub cutoff_date: NaiveDate,
    pub age: AgeBreakdown,
    pub min_age: u32,
    pub max_age: u32,
    pub age_eligible: bool,
    pub education: &'static str,
    pub education_eligible: bool,
    pub attempts: &'static str,
    pub overall: bool,
    pub message: String,
}

/// Check age and education against `exam`'s table.
///
/// Only OBC and SC/ST have their own relaxation rows here; every other
/// category is checked against the general row.
pub fn check_exam(
    exam: Exam,
    birth: NaiveDate,
    cutoff: NaiveDate,
    category: Category,
    qualification: &Qualification,
) -> Result<ExamEligibility> {
    let profile = exam.profile();
    let age = calculate_age(birth, cutoff)?;
    let max_age = profile.max_age(category.relaxation_row());

    let age_eligible = age.years >= profile.min_age && age.years <= max_age;
    let education_eligible = profile.accepts(qualification);
    let overall = age_eligible && education_eligible;

    let message = if overall {
        format!("You are eligible for {}!", profile.name)
    } else if !age_eligible {
        format!(
            "You are not eligible for {}: age {} is outside {}-{} years",
            profile.name, age.years, profile.min_age, max_age
        )
    } else {
        format!(
            "You are not eligible for {}: {} required",
            profile.name, profile.education
        )
    };

    Ok(ExamEligibility {
        exam,
        exam_name: profile.name,
        cutoff_date: cutoff,
        age,
        min_age: profile.min_age,
        max_age,
        age_eligible,
        education: profile.education,
        education_eligible,
        attempts: profile.attempts,
        overall,
        message,
    })
}

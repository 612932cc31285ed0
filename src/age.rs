use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

use crate::error::{Result, ValidationError};

/// Elapsed whole calendar units between a birth date and a cutoff date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Parse a `YYYY-MM-DD` date. Impossible dates (2023-02-29, 2000-13-01) are rejected.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(input.to_string()))
}

/// Calculate age at `cutoff` as (years, months, days).
///
/// Years and months come from the largest whole number of months that can be
/// added to `birth` without passing `cutoff`; days are what is left after that.
/// Month addition clamps to the last day of the target month, so a 29 February
/// birthday reaches its anniversary on 28 February in non-leap years.
pub fn calculate_age(birth: NaiveDate, cutoff: NaiveDate) -> Result<AgeBreakdown> {
    if birth > cutoff {
        return Err(ValidationError::BirthAfterCutoff { birth, cutoff });
    }

    // Non-negative because birth <= cutoff
    let mut whole_months = ((cutoff.year() - birth.year()) * 12 + cutoff.month() as i32
        - birth.month() as i32) as u32;

    let mut anchor = add_months(birth, whole_months);
    if anchor > cutoff {
        whole_months -= 1;
        anchor = add_months(birth, whole_months);
    }

    Ok(AgeBreakdown {
        years: whole_months / 12,
        months: whole_months % 12,
        days: (cutoff - anchor).num_days() as u32,
    })
}

fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

//! Calendar era handling for input dates.
//!
//! Program dates and birthdates are usually written in the Thai solar
//! calendar, whose year numbering runs 543 years ahead of the Gregorian one.
//! Everything past this module works on Gregorian `NaiveDate`s.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EligibilityError, Result};

/// Buddhist era year = Gregorian year + 543
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// Layout accepted by `parse_date`, for messages.
pub const DATE_LAYOUT: &str = "YYYY-MM-DD";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarEra {
    #[default]
    Buddhist,
    Gregorian,
}

impl CalendarEra {
    fn year_offset(&self) -> i32 {
        match self {
            CalendarEra::Buddhist => BUDDHIST_ERA_OFFSET,
            CalendarEra::Gregorian => 0,
        }
    }
}

impl std::fmt::Display for CalendarEra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarEra::Buddhist => write!(f, "buddhist"),
            CalendarEra::Gregorian => write!(f, "gregorian"),
        }
    }
}

impl FromStr for CalendarEra {
    type Err = EligibilityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buddhist" | "be" => Ok(CalendarEra::Buddhist),
            "gregorian" | "ce" | "ad" => Ok(CalendarEra::Gregorian),
            _ => Err(EligibilityError::InvalidEra(s.to_string())),
        }
    }
}

/// Parse a `YYYY-MM-DD` date written in `era` into a Gregorian date.
///
/// The year is converted before the date is validated, so day-of-month
/// checks (Feb 29) use the Gregorian year.
pub fn parse_date(input: &str, era: CalendarEra) -> Result<NaiveDate> {
    let parse_err = |reason: &str| EligibilityError::DateParse {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = input.trim().splitn(3, '-');
    let (year, month, day) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Err(parse_err(&format!("expected {}", DATE_LAYOUT))),
    };

    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return Err(parse_err(&format!("expected {}", DATE_LAYOUT)));
    }

    // str::parse would also take a leading sign
    if ![year, month, day]
        .iter()
        .all(|field| field.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(parse_err("expected digits only"));
    }

    let year: i32 = year.parse().map_err(|_| parse_err("invalid year"))?;
    let month: u32 = month.parse().map_err(|_| parse_err("invalid month"))?;
    let day: u32 = day.parse().map_err(|_| parse_err("invalid day"))?;

    NaiveDate::from_ymd_opt(year - era.year_offset(), month, day)
        .ok_or_else(|| parse_err("no such calendar date"))
}

/// The year of `date` as numbered in `era`.
pub fn to_era_year(date: NaiveDate, era: CalendarEra) -> i32 {
    date.year() + era.year_offset()
}

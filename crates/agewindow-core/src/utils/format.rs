use chrono::{Datelike, NaiveDate};

use crate::calendar::{to_era_year, CalendarEra};
use crate::models::EligibilityResult;

/// Thai month names, January first
pub const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Format a date Thai style: day, month name, Buddhist era year
/// e.g. "1 มิถุนายน พ.ศ.2564"
pub fn thai_date(date: NaiveDate) -> String {
    format!(
        "{} {} พ.ศ.{}",
        date.day(),
        THAI_MONTHS[date.month0() as usize],
        to_era_year(date, CalendarEra::Buddhist)
    )
}

/// Format an optional date, returning "-" if None
pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(thai_date).unwrap_or_else(|| "-".to_string())
}

pub fn format_eligible(result: &EligibilityResult) -> &'static str {
    if result.is_eligible() {
        "Yes"
    } else {
        "No"
    }
}

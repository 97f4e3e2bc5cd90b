use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EligibilityError {
    #[error("Invalid window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("Reference date {reference} is before birthdate {birthdate}")]
    InvalidDateRange {
        birthdate: NaiveDate,
        reference: NaiveDate,
    },

    #[error("Date arithmetic out of range starting from {0}")]
    DateOutOfRange(NaiveDate),

    #[error("Invalid date '{input}': {reason}")]
    DateParse { input: String, reason: String },

    #[error("Unknown gender: {0}")]
    InvalidGender(String),

    #[error("Unknown calendar era: {0}")]
    InvalidEra(String),
}

pub type Result<T> = std::result::Result<T, EligibilityError>;

//! Display helpers for dates and eligibility results.

pub mod format;

pub use format::{format_eligible, format_optional_date, thai_date, THAI_MONTHS};

use chrono::{Datelike, Months, NaiveDate};

use crate::error::{EligibilityError, Result};
use crate::models::Age;

/// Age in (years, months) from `birthdate` as of `reference`.
///
/// Years count completed birthdays. Months are counted from the birth month
/// to the reference month and ignore the day of month, so a person born on
/// the 20th is one month older on the 1st of the next month.
pub fn calc_age(birthdate: NaiveDate, reference: NaiveDate) -> Result<Age> {
    if reference < birthdate {
        return Err(EligibilityError::InvalidDateRange {
            birthdate,
            reference,
        });
    }

    let mut years = reference.year() - birthdate.year();

    // birthday not reached yet this year
    if reference.month() < birthdate.month()
        || (reference.month() == birthdate.month() && reference.day() < birthdate.day())
    {
        years -= 1;
    }

    let months = (reference.month() + 12 - birthdate.month()) % 12;

    let years = u32::try_from(years).map_err(|_| EligibilityError::InvalidDateRange {
        birthdate,
        reference,
    })?;

    Ok(Age { years, months })
}

/// The date `months` calendar months after `birthdate`.
///
/// A day that does not exist in the target month (Feb 29, Aug 31 + 6 months)
/// rolls over to the 1st of the following month rather than clamping to the
/// month end or overflowing by the missing days. For whole-year offsets this
/// is the first day `calc_age` reports the new year count. The month count
/// ignores days and may already have advanced before it.
pub fn anniversary(birthdate: NaiveDate, months: u32) -> Result<NaiveDate> {
    let target = birthdate
        .checked_add_months(Months::new(months))
        .ok_or(EligibilityError::DateOutOfRange(birthdate))?;

    if target.day() == birthdate.day() {
        return Ok(target);
    }

    // checked_add_months clamps to the last day of the month
    target
        .succ_opt()
        .ok_or(EligibilityError::DateOutOfRange(birthdate))
}

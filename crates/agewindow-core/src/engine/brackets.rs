use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::age::{anniversary, calc_age};
use crate::error::Result;
use crate::models::{Age, EligibilityReason, EligibilityResult, EligibilityWindow, Person};

const MONTHS_PER_YEAR: u32 = 12;

/// Age limits for the senior and child brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketThresholds {
    /// Seniors qualify from this many years on.
    pub senior_lower_age_years: u32,
    /// Children qualify from this many months on...
    pub child_lower_age_months: u32,
    /// ...until they turn this many years old.
    pub child_upper_age_years: u32,
}

impl Default for BracketThresholds {
    fn default() -> Self {
        Self {
            senior_lower_age_years: 65,
            child_lower_age_months: 6,
            child_upper_age_years: 2,
        }
    }
}

/// Bracket predicates for the ages at window start and end.
///
/// These mix year and month comparisons and are not a clean "between 6
/// months and 2 years" check. They are evaluated exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BracketChecks {
    in_senior_range: bool,
    in_children_range: bool,
    will_be_senior: bool,
    will_reach_child_lower: bool,
    will_pass_child_upper: bool,
}

impl BracketChecks {
    fn new(age_start: Age, age_end: Age, thresholds: &BracketThresholds) -> Self {
        Self {
            in_senior_range: age_start.years >= thresholds.senior_lower_age_years,
            in_children_range: age_start.months >= thresholds.child_lower_age_months
                && age_end.years <= thresholds.child_upper_age_years
                && age_end.months < 1,
            will_be_senior: age_end.years == thresholds.senior_lower_age_years,
            will_reach_child_lower: age_end.months >= thresholds.child_lower_age_months
                && age_end.years < thresholds.child_upper_age_years,
            will_pass_child_upper: age_end.years == thresholds.child_upper_age_years,
        }
    }
}

/// Decide whether `person` qualifies during `window` and for which part of it.
///
/// Age at the window start is taken on the birthdate when the person is born
/// inside the window. A birthdate after the window end is an error.
pub fn evaluate_eligibility(
    person: &Person,
    window: &EligibilityWindow,
    thresholds: &BracketThresholds,
) -> Result<EligibilityResult> {
    let birthdate = person.birthdate;
    let age_end = calc_age(birthdate, window.end())?;
    let age_start = calc_age(birthdate, window.start().max(birthdate))?;

    debug!(
        %birthdate,
        %age_start,
        %age_end,
        "Computed ages for window"
    );

    let checks = BracketChecks::new(age_start, age_end, thresholds);
    trace!(?checks, "Bracket checks");

    let (start, end, reason) = if checks.in_senior_range {
        (window.start(), window.end(), EligibilityReason::Senior)
    } else if checks.in_children_range {
        (window.start(), window.end(), EligibilityReason::Child)
    } else if checks.will_be_senior {
        let turns_senior =
            anniversary(birthdate, thresholds.senior_lower_age_years * MONTHS_PER_YEAR)?;
        (turns_senior, window.end(), EligibilityReason::TurnsSenior)
    } else if checks.will_reach_child_lower {
        let reaches_lower = anniversary(birthdate, thresholds.child_lower_age_months)?;
        (reaches_lower, window.end(), EligibilityReason::ReachesChildLower)
    } else if checks.will_pass_child_upper {
        let passes_upper =
            anniversary(birthdate, thresholds.child_upper_age_years * MONTHS_PER_YEAR)?;
        (window.start(), passes_upper, EligibilityReason::LeavesChildUpper)
    } else {
        return Ok(EligibilityResult::ineligible());
    };

    match window.clip(start, end) {
        Some(effective) => Ok(EligibilityResult::eligible(effective, reason)),
        None => {
            debug!(%start, %end, %reason, "Bracket interval falls outside the window");
            Ok(EligibilityResult::ineligible())
        }
    }
}

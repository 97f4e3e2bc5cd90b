use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{EligibilityError, Result};

/// A closed date interval, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EligibilityWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl EligibilityWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(EligibilityError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, both ends inclusive.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Clip `[start, end]` to this window. `None` when nothing overlaps.
    pub fn clip(&self, start: NaiveDate, end: NaiveDate) -> Option<Self> {
        let start = start.max(self.start);
        let end = end.min(self.end);
        (start <= end).then_some(Self { start, end })
    }
}

/// Which bracket rule made the person eligible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityReason {
    /// Already a senior when the window opens.
    Senior,
    /// Inside the child band for the whole window.
    Child,
    /// Reaches the senior age during the window.
    TurnsSenior,
    /// Reaches the child lower bound during the window.
    ReachesChildLower,
    /// Passes the child upper bound during the window.
    LeavesChildUpper,
}

impl std::fmt::Display for EligibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EligibilityReason::Senior => write!(f, "Senior"),
            EligibilityReason::Child => write!(f, "Child"),
            EligibilityReason::TurnsSenior => write!(f, "Turns senior"),
            EligibilityReason::ReachesChildLower => write!(f, "Reaches child age"),
            EligibilityReason::LeavesChildUpper => write!(f, "Leaves child age"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    eligible: bool,
    effective_start: Option<NaiveDate>,
    effective_end: Option<NaiveDate>,
    reason: Option<EligibilityReason>,
}

impl EligibilityResult {
    pub fn eligible(window: EligibilityWindow, reason: EligibilityReason) -> Self {
        Self {
            eligible: true,
            effective_start: Some(window.start),
            effective_end: Some(window.end),
            reason: Some(reason),
        }
    }

    pub fn ineligible() -> Self {
        Self {
            eligible: false,
            effective_start: None,
            effective_end: None,
            reason: None,
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.eligible
    }

    pub fn effective_start(&self) -> Option<NaiveDate> {
        self.effective_start
    }

    pub fn effective_end(&self) -> Option<NaiveDate> {
        self.effective_end
    }

    pub fn reason(&self) -> Option<EligibilityReason> {
        self.reason
    }

    pub fn effective_window(&self) -> Option<EligibilityWindow> {
        match (self.effective_start, self.effective_end) {
            (Some(start), Some(end)) => Some(EligibilityWindow { start, end }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_window_rejects_reversed_dates() {
        let err = EligibilityWindow::new(date(2021, 8, 31), date(2021, 6, 1)).unwrap_err();
        assert_eq!(
            err,
            EligibilityError::InvalidWindow {
                start: date(2021, 8, 31),
                end: date(2021, 6, 1),
            }
        );
    }

    #[test]
    fn test_window_single_day() {
        let window = EligibilityWindow::new(date(2021, 6, 1), date(2021, 6, 1)).unwrap();
        assert_eq!(window.num_days(), 1);
        assert!(window.contains(date(2021, 6, 1)));
        assert!(!window.contains(date(2021, 6, 2)));
    }

    #[test]
    fn test_window_num_days() {
        let window = EligibilityWindow::new(date(2021, 6, 1), date(2021, 8, 31)).unwrap();
        assert_eq!(window.num_days(), 92);
    }

    #[test]
    fn test_window_clip() {
        let window = EligibilityWindow::new(date(2021, 6, 1), date(2021, 8, 31)).unwrap();

        let inner = window.clip(date(2021, 7, 5), date(2021, 9, 30)).unwrap();
        assert_eq!(inner.start(), date(2021, 7, 5));
        assert_eq!(inner.end(), date(2021, 8, 31));

        let before = window.clip(date(2021, 1, 1), date(2021, 6, 15)).unwrap();
        assert_eq!(before.start(), date(2021, 6, 1));

        assert!(window.clip(date(2021, 9, 1), date(2021, 9, 30)).is_none());
        assert!(window.clip(date(2021, 4, 1), date(2021, 5, 31)).is_none());
    }

    #[test]
    fn test_result_ineligible_has_no_dates() {
        let result = EligibilityResult::ineligible();
        assert!(!result.is_eligible());
        assert_eq!(result.effective_start(), None);
        assert_eq!(result.effective_end(), None);
        assert_eq!(result.reason(), None);
        assert!(result.effective_window().is_none());
    }

    #[test]
    fn test_result_serializes_dates() {
        let window = EligibilityWindow::new(date(2021, 6, 1), date(2021, 7, 1)).unwrap();
        let result = EligibilityResult::eligible(window, EligibilityReason::LeavesChildUpper);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"eligible":true,"effective_start":"2021-06-01","effective_end":"2021-07-01","reason":"leaves_child_upper"}"#
        );
    }
}

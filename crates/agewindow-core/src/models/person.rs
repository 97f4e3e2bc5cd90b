use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::{self, BracketThresholds};
use crate::error::{EligibilityError, Result};
use crate::models::{EligibilityResult, EligibilityWindow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = EligibilityError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(EligibilityError::InvalidGender(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub gender: Gender,
    pub birthdate: NaiveDate,
}

impl Person {
    pub fn new(gender: Gender, birthdate: NaiveDate) -> Self {
        Self { gender, birthdate }
    }

    /// Age in (years, months) on the given reference date.
    pub fn age_on(&self, reference: NaiveDate) -> Result<Age> {
        engine::calc_age(self.birthdate, reference)
    }

    /// Evaluate against the program window with the standard brackets.
    pub fn eligibility(&self, window: &EligibilityWindow) -> Result<EligibilityResult> {
        engine::evaluate_eligibility(self, window, &BracketThresholds::default())
    }
}

/// Whole years since the last birthday plus months since the last
/// birthday-month. The month part ignores day-of-month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Age {
    pub years: u32,
    pub months: u32,
}

impl Age {
    pub fn new(years: u32, months: u32) -> Self {
        Self { years, months }
    }
}

impl std::fmt::Display for Age {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}y {}m]", self.years, self.months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Male.to_string(), "male");
        assert_eq!(Gender::Female.to_string(), "female");
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" Female ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("f".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!(
            "x".parse::<Gender>(),
            Err(EligibilityError::InvalidGender("x".to_string()))
        );
    }

    #[test]
    fn test_age_display() {
        assert_eq!(Age::new(65, 2).to_string(), "[65y 2m]");
        assert_eq!(Age::default().to_string(), "[0y 0m]");
    }

    #[test]
    fn test_person_age_on() {
        let person = Person::new(Gender::Female, date(1956, 3, 10));
        assert_eq!(person.age_on(date(2021, 6, 1)).unwrap(), Age::new(65, 3));
    }

    #[test]
    fn test_person_serializes_lowercase_gender() {
        let person = Person::new(Gender::Male, date(1957, 10, 8));
        let json = serde_json::to_string(&person).unwrap();
        assert_eq!(json, r#"{"gender":"male","birthdate":"1957-10-08"}"#);
    }
}

//! Evaluate people against the program window and render the outcome.

use agewindow_core::utils::{format_eligible, format_optional_date, thai_date};
use agewindow_core::{
    calc_age, evaluate_eligibility, Age, BracketThresholds, EligibilityResult, EligibilityWindow,
    Person,
};
use anyhow::Result;
use serde::Serialize;

const SEPARATOR: &str = "----------";

#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub person: Person,
    pub age_at_start: Age,
    pub age_at_end: Age,
    pub result: EligibilityResult,
}

pub fn evaluate_all(
    persons: &[Person],
    window: &EligibilityWindow,
    thresholds: &BracketThresholds,
) -> Result<Vec<ReportEntry>> {
    persons
        .iter()
        .map(|person| -> Result<ReportEntry> {
            let birthdate = person.birthdate;
            Ok(ReportEntry {
                person: *person,
                age_at_start: calc_age(birthdate, window.start().max(birthdate))?,
                age_at_end: calc_age(birthdate, window.end())?,
                result: evaluate_eligibility(person, window, thresholds)?,
            })
        })
        .collect()
}

pub fn render_text(entries: &[ReportEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let result = &entry.result;
        let eligible = match result.reason() {
            Some(reason) => format!("{} ({})", format_eligible(result), reason),
            None => format_eligible(result).to_string(),
        };

        out.push_str(&format!(
            "{}: {{{}: {}}}\n",
            i + 1,
            entry.person.gender,
            thai_date(entry.person.birthdate)
        ));
        out.push_str(&format!(
            "Age:\t{} -> {}\n",
            entry.age_at_start, entry.age_at_end
        ));
        out.push_str(&format!("Eligible:\t{}\n", eligible));
        out.push_str(&format!(
            "Service Start Date:\t{}\n",
            format_optional_date(result.effective_start())
        ));
        out.push_str(&format!(
            "Service End Date:\t{}\n",
            format_optional_date(result.effective_end())
        ));
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

pub fn render_json(entries: &[ReportEntry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agewindow_core::Gender;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window() -> EligibilityWindow {
        EligibilityWindow::new(date(2021, 6, 1), date(2021, 8, 31)).unwrap()
    }

    #[test]
    fn test_evaluate_all_ages() {
        let persons = [Person::new(Gender::Female, date(2019, 7, 1))];
        let entries = evaluate_all(&persons, &window(), &BracketThresholds::default()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].age_at_start, Age::new(1, 11));
        assert_eq!(entries[0].age_at_end, Age::new(2, 1));
        assert!(entries[0].result.is_eligible());
    }

    #[test]
    fn test_evaluate_all_rejects_unborn() {
        let persons = [Person::new(Gender::Male, date(2022, 1, 1))];
        assert!(evaluate_all(&persons, &window(), &BracketThresholds::default()).is_err());
    }

    #[test]
    fn test_render_text_eligible() {
        let persons = [Person::new(Gender::Female, date(2019, 7, 1))];
        let entries = evaluate_all(&persons, &window(), &BracketThresholds::default()).unwrap();
        let text = render_text(&entries);
        let expected = "\
1: {female: 1 กรกฎาคม พ.ศ.2562}
Age:\t[1y 11m] -> [2y 1m]
Eligible:\tYes (Leaves child age)
Service Start Date:\t1 มิถุนายน พ.ศ.2564
Service End Date:\t1 กรกฎาคม พ.ศ.2564
----------
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_text_ineligible() {
        let persons = [Person::new(Gender::Male, date(1957, 10, 8))];
        let entries = evaluate_all(&persons, &window(), &BracketThresholds::default()).unwrap();
        let text = render_text(&entries);
        assert!(text.contains("Eligible:\tNo\n"));
        assert!(text.contains("Service Start Date:\t-\n"));
        assert!(text.contains("Service End Date:\t-\n"));
    }

    #[test]
    fn test_render_text_numbers_each_entry() {
        let persons = [
            Person::new(Gender::Female, date(1956, 3, 10)),
            Person::new(Gender::Male, date(1957, 10, 8)),
        ];
        let entries = evaluate_all(&persons, &window(), &BracketThresholds::default()).unwrap();
        let text = render_text(&entries);
        assert!(text.starts_with("1: {female: 10 มีนาคม พ.ศ.2499}\n"));
        assert!(text.contains("\n2: {male: 8 ตุลาคม พ.ศ.2500}\n"));
        assert!(text.contains("Eligible:\tYes (Senior)\n"));
        assert_eq!(text.matches(SEPARATOR).count(), 2);
        assert!(text.ends_with("----------\n"));
    }

    #[test]
    fn test_render_json() {
        let persons = [Person::new(Gender::Female, date(1956, 3, 10))];
        let entries = evaluate_all(&persons, &window(), &BracketThresholds::default()).unwrap();
        let json = render_json(&entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["person"]["birthdate"], "1956-03-10");
        assert_eq!(value[0]["age_at_start"]["years"], 65);
        assert_eq!(value[0]["result"]["eligible"], true);
        assert_eq!(value[0]["result"]["effective_start"], "2021-06-01");
        assert_eq!(value[0]["result"]["reason"], "senior");
    }
}

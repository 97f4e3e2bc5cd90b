//! Program configuration.
//!
//! Defaults describe the 2564 (2021) program window in Buddhist-era dates.
//! Each value can be overridden from the environment; a `.env` file in the
//! working directory is loaded first by `main`.

use agewindow_core::{parse_date, BracketThresholds, CalendarEra, EligibilityWindow};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_START_DATE: &str = "2564-06-01";
const DEFAULT_END_DATE: &str = "2564-08-31";

const ENV_START_DATE: &str = "AGEWINDOW_START_DATE";
const ENV_END_DATE: &str = "AGEWINDOW_END_DATE";
const ENV_ERA: &str = "AGEWINDOW_ERA";
const ENV_SENIOR_AGE: &str = "AGEWINDOW_SENIOR_AGE_YEARS";
const ENV_CHILD_LOWER_AGE: &str = "AGEWINDOW_CHILD_LOWER_AGE_MONTHS";
const ENV_CHILD_UPPER_AGE: &str = "AGEWINDOW_CHILD_UPPER_AGE_YEARS";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub window_start: String,
    pub window_end: String,
    pub era: CalendarEra,
    pub thresholds: BracketThresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_start: DEFAULT_START_DATE.to_string(),
            window_end: DEFAULT_END_DATE.to_string(),
            era: CalendarEra::Buddhist,
            thresholds: BracketThresholds::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(start) = lookup(ENV_START_DATE) {
            config.window_start = start;
        }
        if let Some(end) = lookup(ENV_END_DATE) {
            config.window_end = end;
        }
        if let Some(era) = lookup(ENV_ERA) {
            config.era = era
                .parse()
                .with_context(|| format!("Invalid {}", ENV_ERA))?;
        }

        let thresholds = &mut config.thresholds;
        if let Some(years) = lookup(ENV_SENIOR_AGE) {
            thresholds.senior_lower_age_years = parse_count(ENV_SENIOR_AGE, &years)?;
        }
        if let Some(months) = lookup(ENV_CHILD_LOWER_AGE) {
            thresholds.child_lower_age_months = parse_count(ENV_CHILD_LOWER_AGE, &months)?;
        }
        if let Some(years) = lookup(ENV_CHILD_UPPER_AGE) {
            thresholds.child_upper_age_years = parse_count(ENV_CHILD_UPPER_AGE, &years)?;
        }

        Ok(config)
    }

    /// Parse the configured dates into the program window.
    pub fn window(&self) -> Result<EligibilityWindow> {
        let start = parse_date(&self.window_start, self.era)
            .context("Failed to parse window start date")?;
        let end = parse_date(&self.window_end, self.era)
            .context("Failed to parse window end date")?;
        Ok(EligibilityWindow::new(start, end)?)
    }
}

fn parse_count(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid {}: '{}'", key, value))
}

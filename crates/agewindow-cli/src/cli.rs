//! Command-line argument handling.

use agewindow_core::{parse_date, CalendarEra, Gender, Person};
use anyhow::{bail, Context, Result};

pub const USAGE: &str = "\
Usage: agewindow [OPTIONS] [GENDER:BIRTHDATE ...]

Checks who may apply for the service program and for which dates.
Without any GENDER:BIRTHDATE arguments the built-in sample is used.

Arguments:
  GENDER:BIRTHDATE   e.g. female:2499-03-10 (birthdate in the configured era)

Options:
  --json             Print results as JSON
  --show-config      Print the effective configuration and exit
  -h, --help         Print this help

Environment:
  AGEWINDOW_START_DATE, AGEWINDOW_END_DATE   program window (YYYY-MM-DD)
  AGEWINDOW_ERA                              buddhist (default) or gregorian
  AGEWINDOW_SENIOR_AGE_YEARS, AGEWINDOW_CHILD_LOWER_AGE_MONTHS,
  AGEWINDOW_CHILD_UPPER_AGE_YEARS            bracket limits
  RUST_LOG                                   log filter (default: warn)
";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub json: bool,
    pub show_config: bool,
    pub help: bool,
    pub persons: Vec<String>,
}

impl Args {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut parsed = Args::default();
        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--show-config" => parsed.show_config = true,
                "-h" | "--help" => parsed.help = true,
                flag if flag.starts_with('-') => bail!("Unknown option: {}", flag),
                _ => parsed.persons.push(arg),
            }
        }
        Ok(parsed)
    }
}

/// Parse a `GENDER:BIRTHDATE` argument.
pub fn parse_person(arg: &str, era: CalendarEra) -> Result<Person> {
    let (gender, birthdate) = arg
        .split_once(':')
        .with_context(|| format!("Expected GENDER:BIRTHDATE, got '{}'", arg))?;

    let gender: Gender = gender.parse()?;
    let birthdate = parse_date(birthdate, era)
        .with_context(|| format!("Invalid birthdate in '{}'", arg))?;

    Ok(Person::new(gender, birthdate))
}

//! agewindow - checks who may apply for an age-bracket service program.
//!
//! Seniors and young children qualify. For each person the tool prints
//! whether they qualify and the part of the program window in which they do.

mod cli;
mod config;
mod report;

use std::io;

use agewindow_core::{parse_date, CalendarEra, Gender, Person};
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{parse_person, Args, USAGE};
use config::Config;

/// Built-in sample: Buddhist-era birthdates
const SAMPLE_PERSONS: [(&str, Gender); 4] = [
    ("2499-03-10", Gender::Female),
    ("2500-10-08", Gender::Male),
    ("2562-07-01", Gender::Female),
    ("2564-01-05", Gender::Female),
];

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn sample_persons() -> Result<Vec<Person>> {
    SAMPLE_PERSONS
        .iter()
        .map(|(birthdate, gender)| -> Result<Person> {
            let birthdate = parse_date(birthdate, CalendarEra::Buddhist)?;
            Ok(Person::new(*gender, birthdate))
        })
        .collect()
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let config = Config::from_env().context("Failed to load configuration")?;
    if args.show_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let window = config.window()?;
    info!(
        start = %window.start(),
        end = %window.end(),
        era = %config.era,
        "Program window"
    );

    let persons = if args.persons.is_empty() {
        sample_persons()?
    } else {
        args.persons
            .iter()
            .map(|arg| parse_person(arg, config.era))
            .collect::<Result<Vec<_>>>()?
    };

    let entries = report::evaluate_all(&persons, &window, &config.thresholds)?;
    let eligible = entries.iter().filter(|e| e.result.is_eligible()).count();
    info!(total = entries.len(), eligible, "Evaluated eligibility");

    if args.json {
        println!("{}", report::render_json(&entries)?);
    } else {
        print!("{}", report::render_text(&entries));
    }

    Ok(())
}

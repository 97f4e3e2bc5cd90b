//! Core library for agewindow.
//!
//! Decides whether a person qualifies for a time-bound service program based on
//! age brackets, and computes the part of the program window during which they
//! actually qualify.
//!
//! - `engine`: age calculation and bracket evaluation
//! - `models`: `Person`, `Age`, `EligibilityWindow`, `EligibilityResult`
//! - `calendar`: Buddhist-era date parsing
//! - `utils`: display helpers (Thai dates)

pub mod calendar;
pub mod engine;
pub mod error;
pub mod models;
pub mod utils;

pub use calendar::{parse_date, CalendarEra};
pub use engine::{calc_age, evaluate_eligibility, BracketThresholds};
pub use error::EligibilityError;
pub use models::{Age, EligibilityReason, EligibilityResult, EligibilityWindow, Gender, Person};

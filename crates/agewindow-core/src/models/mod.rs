//! Data models for eligibility checks.
//!
//! - `Person`, `Gender`: the applicant
//! - `Age`: years plus months relative to a reference date
//! - `EligibilityWindow`: a validated date interval
//! - `EligibilityResult`, `EligibilityReason`: the outcome of an evaluation

pub mod person;
pub mod window;

pub use person::{Age, Gender, Person};
pub use window::{EligibilityReason, EligibilityResult, EligibilityWindow};

//! The eligibility engine.
//!
//! Age is computed at both ends of the program window and the bracket rules
//! consult the two ages to pick the part of the window the person qualifies for.
//! Everything here is a pure function of its inputs.

pub mod age;
pub mod brackets;

pub use age::{anniversary, calc_age};
pub use brackets::{evaluate_eligibility, BracketThresholds};

//! cfr-risk
//!
//! Case-fatality risk calculator.
//!
//! Goals:
//! - Age band selection (nearest decade, clamped to the table)
//! - Smoker multiplier on the age-adjusted baseline
//! - Independent survival product over the remaining risk factors
//!
//! Deterministic, pure logic. No IO, no time, no global state.

mod engine;
mod table;
mod types;

pub use engine::{compute_risk, evaluate};
pub use table::*;
pub use types::*;

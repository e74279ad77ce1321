//! Command handler modules for cfr-cli.
//!
//! Output rendering shared by the handlers lives here.

pub mod risk;
pub mod table;

/// Render a probability as a percentage with four decimals, e.g. `0.2000%`.
pub fn format_percent(p: f64) -> String {
    format!("{:.4}%", p * 100.0)
}

pub fn risk_sentence(p: f64) -> String {
    format!(
        "You have a {} risk of dying if you contract COVID-19.",
        format_percent(p)
    )
}

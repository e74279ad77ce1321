//! `cfr AGE [flags]`: evaluate one profile and print the result.

use anyhow::{Context, Result};
use cfr_risk::{evaluate, RiskAssessment, RiskProfile};
use serde::Serialize;
use tracing::debug;

/// JSON payload for `--json`.
#[derive(Serialize)]
struct RiskReport<'a> {
    #[serde(flatten)]
    assessment: &'a RiskAssessment,
    risk_percent: String,
    table_hash: String,
}

pub fn run(profile: &RiskProfile, json: bool) -> Result<()> {
    let assessment = evaluate(profile);
    debug!(
        band = assessment.age_band.decade(),
        odds_ratio = assessment.odds_ratio,
        age_adjusted_risk = assessment.age_adjusted_risk,
        applied = assessment.applied.len(),
        risk = assessment.risk,
        "risk evaluated"
    );

    if json {
        let table = cfr_config::load_published_table()?;
        let report = RiskReport {
            assessment: &assessment,
            risk_percent: super::format_percent(assessment.risk),
            table_hash: table.table_hash,
        };
        let out = serde_json::to_string_pretty(&report).context("serialize risk report failed")?;
        println!("{}", out);
    } else {
        println!("{}", super::risk_sentence(assessment.risk));
    }

    Ok(())
}

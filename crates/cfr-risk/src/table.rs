//! Epidemiological constants.
//!
//! # Sources
//! - Baseline CFR (female, 10-19, no comorbidities) and per-factor CFRs:
//!   Caramelo, Ferreira & Oliveiros, "Estimation of risk factors for COVID-19
//!   mortality - preliminary results", Feb. 2020, tables 1 and 2.
//! - Smoker multiplier: male smokers over 65 were reported to die at 5x the
//!   rate of female non-smokers of the same age. Dividing out the male CFR and
//!   the male share of cases leaves a multiplier for smoking on its own.
//!
//! Every number the calculator uses lives in this module.

use serde::Serialize;

use crate::{AgeBand, RiskFactor};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Reference CFR: female, age 10-19, no comorbidities (0.2%).
pub const BASELINE_RISK: f64 = 0.002;

/// Overall CFR of the study population.
pub const OVERALL_CFR: f64 = 0.022;

/// Male share of the study population.
pub const MALE_SHARE: f64 = 0.5143;

/// Reported fatality ratio of male smokers vs female non-smokers, age 65+.
pub const MALE_SMOKER_RATIO: f64 = 5.00;

pub const MALE_CFR: f64 = 0.0275;
pub const HYPERTENSIVE_CFR: f64 = 0.0574;
pub const DIABETIC_CFR: f64 = 0.0678;
pub const CARDIAC_CFR: f64 = 0.0897;
pub const RESPIRATORY_CFR: f64 = 0.0597;
pub const CANCER_CFR: f64 = 0.0537;

/// Multiplier applied to the age-adjusted baseline for smokers (~4.2355).
pub const SMOKER_FACTOR: f64 =
    MALE_SMOKER_RATIO * OVERALL_CFR / MALE_CFR * MALE_SHARE / (1.0 - MALE_SHARE);

/// Age odds ratios relative to the 10-19 band, indexed by [`AgeBand::index`].
pub const AGE_ODDS_RATIOS: [f64; AgeBand::COUNT] = [
    1.00,    // 10
    0.2017,  // 20
    0.3271,  // 30
    5.6030,  // 40
    6.7626,  // 50
    18.8161, // 60
    43.7291, // 70
    86.8680, // 80
];

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One row of the age table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgeRow {
    pub decade: u32,
    pub odds_ratio: f64,
}

/// One row of the risk-factor table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FactorRow {
    pub factor: RiskFactor,
    pub contribution: Contribution,
}

/// How a risk factor enters the computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Contribution {
    /// Scales the age-adjusted baseline risk.
    AgeMultiplier(f64),
    /// Independent probability of death; multiplies survival by `1 - p`.
    IndependentCfr(f64),
}

/// Serializable snapshot of every constant the calculator reads.
///
/// Built from the module constants, never from outside input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskTable {
    pub baseline_risk: f64,
    pub age_bands: Vec<AgeRow>,
    pub factors: Vec<FactorRow>,
}

impl RiskTable {
    pub fn published() -> Self {
        Self {
            baseline_risk: BASELINE_RISK,
            age_bands: AgeBand::ALL
                .iter()
                .map(|b| AgeRow {
                    decade: b.decade(),
                    odds_ratio: b.odds_ratio(),
                })
                .collect(),
            factors: RiskFactor::ALL
                .iter()
                .map(|f| FactorRow {
                    factor: *f,
                    contribution: f.contribution(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoker_factor_matches_derivation() {
        let expected = 5.00 * 0.022 / 0.0275 * 0.5143 / (1.0 - 0.5143);
        assert!((SMOKER_FACTOR - expected).abs() < 1e-15);
        assert!((SMOKER_FACTOR - 4.2355).abs() < 1e-4);
    }

    #[test]
    fn published_table_covers_every_band_and_factor() {
        let t = RiskTable::published();
        assert_eq!(t.age_bands.len(), AgeBand::COUNT);
        assert_eq!(t.factors.len(), RiskFactor::ALL.len());
        assert_eq!(t.age_bands[0].decade, 10);
        assert_eq!(t.age_bands[7].odds_ratio, 86.8680);
    }

    #[test]
    fn odds_ratios_non_decreasing_from_band_20() {
        for w in AGE_ODDS_RATIOS[1..].windows(2) {
            assert!(w[0] <= w[1], "{} > {}", w[0], w[1]);
        }
    }
}

use crate::table::{Contribution, BASELINE_RISK};
use crate::{AppliedFactor, RiskAssessment, RiskFactor, RiskProfile};

/// Main evaluator.
///
/// 1) age -> band -> baseline x odds ratio
/// 2) smoker scales that age-adjusted risk
/// 3) every other factor multiplies survival by (1 - cfr), assuming the
///    factors are statistically independent
pub fn evaluate(profile: &RiskProfile) -> RiskAssessment {
    let band = profile.band();
    let odds_ratio = band.odds_ratio();
    let mut age_adjusted_risk = BASELINE_RISK * odds_ratio;

    let mut smoker_multiplier = None;
    let mut applied = Vec::new();

    // Multipliers must land before the survival product is seeded.
    for factor in &profile.factors {
        if let Contribution::AgeMultiplier(m) = factor.contribution() {
            age_adjusted_risk *= m;
            smoker_multiplier = Some(m);
        }
    }

    let mut survival = 1.0 - age_adjusted_risk;

    for factor in &profile.factors {
        if let Contribution::IndependentCfr(cfr) = factor.contribution() {
            let m = 1.0 - cfr;
            survival *= m;
            applied.push(AppliedFactor {
                factor: *factor,
                cfr,
                survival_multiplier: m,
            });
        }
    }

    RiskAssessment {
        age: profile.age,
        age_band: band,
        odds_ratio,
        age_adjusted_risk,
        smoker_multiplier,
        applied,
        survival,
        risk: 1.0 - survival,
    }
}

/// Flag-based entry point; see [`evaluate`] for the breakdown.
#[allow(clippy::too_many_arguments)]
pub fn compute_risk(
    age: u32,
    male: bool,
    smoker: bool,
    hypertensive: bool,
    diabetic: bool,
    cardiac: bool,
    respiratory: bool,
    cancer: bool,
) -> f64 {
    RiskProfile::new(age)
        .with_if(RiskFactor::Male, male)
        .with_if(RiskFactor::Smoker, smoker)
        .with_if(RiskFactor::Hypertensive, hypertensive)
        .with_if(RiskFactor::Diabetic, diabetic)
        .with_if(RiskFactor::Cardiac, cardiac)
        .with_if(RiskFactor::Respiratory, respiratory)
        .with_if(RiskFactor::Cancer, cancer)
        .risk()
}

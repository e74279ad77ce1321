use std::collections::BTreeSet;

use serde::Serialize;

use crate::table::{
    Contribution, AGE_ODDS_RATIOS, CANCER_CFR, CARDIAC_CFR, DIABETIC_CFR, HYPERTENSIVE_CFR,
    MALE_CFR, RESPIRATORY_CFR, SMOKER_FACTOR,
};

/// Decade bucket of the age table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u32")]
pub enum AgeBand {
    Ten,
    Twenty,
    Thirty,
    Forty,
    Fifty,
    Sixty,
    Seventy,
    Eighty,
}

impl AgeBand {
    pub const COUNT: usize = 8;

    pub const ALL: [AgeBand; AgeBand::COUNT] = [
        AgeBand::Ten,
        AgeBand::Twenty,
        AgeBand::Thirty,
        AgeBand::Forty,
        AgeBand::Fifty,
        AgeBand::Sixty,
        AgeBand::Seventy,
        AgeBand::Eighty,
    ];

    /// Round `age` to the nearest decade (ties away from zero) and clamp the
    /// result into 10..=80.
    ///
    /// Ages 0-4 round to 0, which has no row; they take the 10 band.
    pub fn from_age(age: u32) -> Self {
        let tens = age / 10 + u32::from(age % 10 >= 5);
        let idx = tens.clamp(1, Self::COUNT as u32) - 1;
        Self::ALL[idx as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower edge of the band in years (10, 20, ... 80).
    pub fn decade(self) -> u32 {
        (self.index() as u32 + 1) * 10
    }

    pub fn odds_ratio(self) -> f64 {
        AGE_ODDS_RATIOS[self.index()]
    }
}

impl From<AgeBand> for u32 {
    fn from(b: AgeBand) -> u32 {
        b.decade()
    }
}

/// Binary risk factors known to the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    Smoker,
    Male,
    Hypertensive,
    Diabetic,
    Cardiac,
    Respiratory,
    Cancer,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 7] = [
        RiskFactor::Smoker,
        RiskFactor::Male,
        RiskFactor::Hypertensive,
        RiskFactor::Diabetic,
        RiskFactor::Cardiac,
        RiskFactor::Respiratory,
        RiskFactor::Cancer,
    ];

    pub fn contribution(self) -> Contribution {
        match self {
            RiskFactor::Smoker => Contribution::AgeMultiplier(SMOKER_FACTOR),
            RiskFactor::Male => Contribution::IndependentCfr(MALE_CFR),
            RiskFactor::Hypertensive => Contribution::IndependentCfr(HYPERTENSIVE_CFR),
            RiskFactor::Diabetic => Contribution::IndependentCfr(DIABETIC_CFR),
            RiskFactor::Cardiac => Contribution::IndependentCfr(CARDIAC_CFR),
            RiskFactor::Respiratory => Contribution::IndependentCfr(RESPIRATORY_CFR),
            RiskFactor::Cancer => Contribution::IndependentCfr(CANCER_CFR),
        }
    }
}

/// Inputs for one evaluation: an age plus the asserted risk factors.
///
/// Absence of [`RiskFactor::Male`] means female.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RiskProfile {
    pub age: u32,
    pub factors: BTreeSet<RiskFactor>,
}

impl RiskProfile {
    pub fn new(age: u32) -> Self {
        Self {
            age,
            factors: BTreeSet::new(),
        }
    }

    pub fn with(mut self, factor: RiskFactor) -> Self {
        self.factors.insert(factor);
        self
    }

    /// Assert `factor` only when `on` is true. Handy when mapping CLI flags.
    pub fn with_if(self, factor: RiskFactor, on: bool) -> Self {
        if on {
            self.with(factor)
        } else {
            self
        }
    }

    pub fn band(&self) -> AgeBand {
        AgeBand::from_age(self.age)
    }

    pub fn risk(&self) -> f64 {
        crate::evaluate(self).risk
    }
}

/// Survival multiplier contributed by one independent factor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppliedFactor {
    pub factor: RiskFactor,
    pub cfr: f64,
    pub survival_multiplier: f64,
}

/// Full breakdown of one evaluation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub age: u32,
    pub age_band: AgeBand,
    pub odds_ratio: f64,
    /// Baseline x odds ratio, times the smoker multiplier when asserted.
    pub age_adjusted_risk: f64,
    pub smoker_multiplier: Option<f64>,
    pub applied: Vec<AppliedFactor>,
    pub survival: f64,
    pub risk: f64,
}

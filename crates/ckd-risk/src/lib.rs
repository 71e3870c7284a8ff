//! ckd-risk
//!
//! Heuristic chronic kidney disease risk scoring. Pure functions — no I/O.
//! A record's score is the sum of the weights of the risk factors it meets;
//! the verdict is a single threshold on that score.

pub mod factors;
pub mod guidance;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use ckd_core::models::patient::PatientRecord;

use factors::{risk_factors, RiskFactor};

/// Scores at or above this classify as [`RiskLevel::HighRisk`].
pub const HIGH_RISK_THRESHOLD: u8 = 4;

/// Score when every risk factor is met.
pub const MAX_SCORE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    LowRisk,
    HighRisk,
}

impl RiskLevel {
    /// Classify a risk score.
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::HighRisk
        } else {
            RiskLevel::LowRisk
        }
    }

    /// The assessment wording used on reports.
    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::HighRisk => "HIGH RISK OF CKD",
            RiskLevel::LowRisk => "LOW RISK OF CKD",
        }
    }
}

/// The outcome of one evaluation: the score and the level it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Verdict {
    pub score: u8,
    pub level: RiskLevel,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        Self {
            score,
            level: RiskLevel::from_score(score),
        }
    }

    pub fn is_high_risk(&self) -> bool {
        self.level == RiskLevel::HighRisk
    }
}

/// Score a patient record.
///
/// Total and deterministic: every record yields a verdict with a score in
/// `0..=MAX_SCORE`.
pub fn evaluate(record: &PatientRecord) -> Verdict {
    let score = risk_factors()
        .iter()
        .filter(|factor| factor.is_met(record))
        .map(|factor| factor.weight)
        .sum();
    Verdict::from_score(score)
}

/// The risk factors a record meets, in scoring order.
pub fn contributing_factors(record: &PatientRecord) -> Vec<&'static RiskFactor> {
    risk_factors()
        .iter()
        .filter(|factor| factor.is_met(record))
        .collect()
}

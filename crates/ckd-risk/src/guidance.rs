use serde::Serialize;

use crate::RiskLevel;

/// Advisory text shown alongside a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub summary: &'static str,
    pub detail: &'static str,
    pub heading: &'static str,
    pub recommendations: &'static [&'static str],
}

static HIGH_RISK: Guidance = Guidance {
    summary: "High Risk of Chronic Kidney Disease detected.",
    detail: "Immediate medical consultation recommended.",
    heading: "Doctor Recommendation",
    recommendations: &[
        "Consult a Nephrologist immediately",
        "Avoid high salt & protein intake",
        "Regular kidney function tests required",
    ],
};

static LOW_RISK: Guidance = Guidance {
    summary: "Low Risk of Chronic Kidney Disease.",
    detail: "Patient condition appears stable.",
    heading: "General Health Suggestions",
    recommendations: &[
        "Stay hydrated",
        "Balanced low-salt diet",
        "Regular exercise",
        "Periodic health checkups",
    ],
};

/// The fixed advisory message for a risk level.
pub fn guidance(level: RiskLevel) -> &'static Guidance {
    match level {
        RiskLevel::HighRisk => &HIGH_RISK,
        RiskLevel::LowRisk => &LOW_RISK,
    }
}

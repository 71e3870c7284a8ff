use serde::Serialize;

use ckd_core::models::patient::PatientRecord;

/// A weighted clinical criterion contributing to the risk score.
#[derive(Debug, Clone, Serialize)]
pub struct RiskFactor {
    pub id: &'static str,
    pub name: &'static str,
    /// Human-readable form of the criterion (e.g. "serum creatinine > 1.5 mg/dl").
    pub criterion: &'static str,
    pub weight: u8,
    #[serde(skip)]
    predicate: fn(&PatientRecord) -> bool,
}

impl RiskFactor {
    pub fn is_met(&self, record: &PatientRecord) -> bool {
        (self.predicate)(record)
    }
}

/// The scoring criteria, in the order they are applied.
///
/// Weights and cut-offs are fixed; all terms are additive and independent.
pub fn risk_factors() -> &'static [RiskFactor] {
    static FACTORS: [RiskFactor; 7] = [
        RiskFactor {
            id: "elevated_creatinine",
            name: "Elevated Serum Creatinine",
            criterion: "serum creatinine > 1.5 mg/dl",
            weight: 2,
            predicate: |r| r.serum_creatinine > 1.5,
        },
        RiskFactor {
            id: "elevated_urea",
            name: "Elevated Blood Urea",
            criterion: "blood urea > 50 mg/dl",
            weight: 1,
            predicate: |r| r.blood_urea > 50,
        },
        RiskFactor {
            id: "low_hemoglobin",
            name: "Low Hemoglobin",
            criterion: "hemoglobin < 11 g/dl",
            weight: 1,
            predicate: |r| r.hemoglobin < 11.0,
        },
        RiskFactor {
            id: "high_blood_pressure",
            name: "High Blood Pressure",
            criterion: "blood pressure > 140 mmHg",
            weight: 1,
            predicate: |r| r.blood_pressure > 140,
        },
        RiskFactor {
            id: "diabetes",
            name: "Diabetes Mellitus",
            criterion: "diabetes mellitus = yes",
            weight: 1,
            predicate: |r| r.diabetes_mellitus.is_yes(),
        },
        RiskFactor {
            id: "hypertension",
            name: "Hypertension",
            criterion: "hypertension = yes",
            weight: 1,
            predicate: |r| r.hypertension.is_yes(),
        },
        RiskFactor {
            id: "anemia",
            name: "Anemia",
            criterion: "anemia = yes",
            weight: 1,
            predicate: |r| r.anemia.is_yes(),
        },
    ];
    &FACTORS
}

/// Look up a risk factor by id.
pub fn get_factor(id: &str) -> Option<&'static RiskFactor> {
    risk_factors().iter().find(|f| f.id == id)
}

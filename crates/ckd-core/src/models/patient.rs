use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::CoreError;
use crate::fields::{all_fields, FieldRange};
use crate::models::categorical::{Appetite, CellMorphology, Presence, YesNo};
use crate::models::specific_gravity::SpecificGravity;

/// One patient's measurements as submitted through the intake form.
///
/// Constructed once per evaluation request and never mutated. Records that
/// arrive over the wire are checked against the form's field domains while
/// deserializing, so a `PatientRecord` obtained from JSON is always in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(try_from = "PatientForm")]
#[ts(export)]
pub struct PatientRecord {
    // Basic info
    pub age: u32,
    pub blood_pressure: u32,
    #[ts(type = "number")]
    pub specific_gravity: SpecificGravity,
    pub albumin: u32,
    pub sugar: u32,

    // Urine test
    pub red_blood_cells: CellMorphology,
    pub pus_cell: CellMorphology,
    pub pus_cell_clumps: Presence,
    pub bacteria: Presence,
    pub blood_glucose_random: u32,

    // Blood test
    pub blood_urea: u32,
    pub serum_creatinine: f64,
    pub sodium: u32,
    pub potassium: f64,
    pub hemoglobin: f64,

    // Medical history
    pub hypertension: YesNo,
    pub diabetes_mellitus: YesNo,
    pub coronary_artery_disease: YesNo,
    pub appetite: Appetite,
    pub pedal_edema: YesNo,
    pub anemia: YesNo,
}

/// Unchecked wire shape of a [`PatientRecord`].
///
/// Numeric fields are accepted as-is and specific gravity as a raw number;
/// the `TryFrom` conversion applies the domain checks.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientForm {
    pub age: u32,
    pub blood_pressure: u32,
    pub specific_gravity: f64,
    pub albumin: u32,
    pub sugar: u32,
    pub red_blood_cells: CellMorphology,
    pub pus_cell: CellMorphology,
    pub pus_cell_clumps: Presence,
    pub bacteria: Presence,
    pub blood_glucose_random: u32,
    pub blood_urea: u32,
    pub serum_creatinine: f64,
    pub sodium: u32,
    pub potassium: f64,
    pub hemoglobin: f64,
    pub hypertension: YesNo,
    pub diabetes_mellitus: YesNo,
    pub coronary_artery_disease: YesNo,
    pub appetite: Appetite,
    pub pedal_edema: YesNo,
    pub anemia: YesNo,
}

/// A single field whose value falls outside its permitted domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct FieldViolation {
    pub field_id: String,
    pub value: f64,
    pub expected_range: Option<FieldRange>,
    pub message: String,
}

impl Default for PatientRecord {
    /// The intake form's initial state.
    fn default() -> Self {
        Self {
            age: 45,
            blood_pressure: 80,
            specific_gravity: SpecificGravity::Sg1005,
            albumin: 1,
            sugar: 0,
            red_blood_cells: CellMorphology::Normal,
            pus_cell: CellMorphology::Normal,
            pus_cell_clumps: Presence::Present,
            bacteria: Presence::Present,
            blood_glucose_random: 120,
            blood_urea: 40,
            serum_creatinine: 1.2,
            sodium: 135,
            potassium: 4.5,
            hemoglobin: 12.0,
            hypertension: YesNo::Yes,
            diabetes_mellitus: YesNo::Yes,
            coronary_artery_disease: YesNo::Yes,
            appetite: Appetite::Good,
            pedal_edema: YesNo::Yes,
            anemia: YesNo::Yes,
        }
    }
}

impl PatientRecord {
    /// Numeric value of a slider or selector field, by field id.
    ///
    /// Returns `None` for categorical fields and unknown ids.
    pub fn numeric_value(&self, field_id: &str) -> Option<f64> {
        let value = match field_id {
            "age" => f64::from(self.age),
            "blood_pressure" => f64::from(self.blood_pressure),
            "specific_gravity" => self.specific_gravity.value(),
            "albumin" => f64::from(self.albumin),
            "sugar" => f64::from(self.sugar),
            "blood_glucose_random" => f64::from(self.blood_glucose_random),
            "blood_urea" => f64::from(self.blood_urea),
            "serum_creatinine" => self.serum_creatinine,
            "sodium" => f64::from(self.sodium),
            "potassium" => self.potassium,
            "hemoglobin" => self.hemoglobin,
            _ => return None,
        };
        Some(value)
    }

    /// Check every ranged field against its domain.
    pub fn validate(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        for spec in all_fields() {
            let Some(range) = spec.kind.range() else {
                continue;
            };
            if let Some(value) = self.numeric_value(&spec.id)
                && !range.contains(value)
            {
                violations.push(FieldViolation {
                    field_id: spec.id.clone(),
                    value,
                    expected_range: Some(*range),
                    message: format!(
                        "{} {} is outside range [{}, {}]",
                        spec.label, value, range.min, range.max,
                    ),
                });
            }
        }
        violations
    }

    /// Fail with every violation if any field is out of its domain.
    pub fn ensure_valid(&self) -> Result<(), CoreError> {
        let violations = self.validate();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(CoreError::OutOfDomain(violations))
        }
    }
}

impl TryFrom<PatientForm> for PatientRecord {
    type Error = CoreError;

    fn try_from(form: PatientForm) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();

        let specific_gravity = match SpecificGravity::try_from(form.specific_gravity) {
            Ok(sg) => sg,
            Err(e) => {
                violations.push(FieldViolation {
                    field_id: "specific_gravity".to_string(),
                    value: form.specific_gravity,
                    expected_range: None,
                    message: e.to_string(),
                });
                SpecificGravity::default()
            }
        };

        let record = PatientRecord {
            age: form.age,
            blood_pressure: form.blood_pressure,
            specific_gravity,
            albumin: form.albumin,
            sugar: form.sugar,
            red_blood_cells: form.red_blood_cells,
            pus_cell: form.pus_cell,
            pus_cell_clumps: form.pus_cell_clumps,
            bacteria: form.bacteria,
            blood_glucose_random: form.blood_glucose_random,
            blood_urea: form.blood_urea,
            serum_creatinine: form.serum_creatinine,
            sodium: form.sodium,
            potassium: form.potassium,
            hemoglobin: form.hemoglobin,
            hypertension: form.hypertension,
            diabetes_mellitus: form.diabetes_mellitus,
            coronary_artery_disease: form.coronary_artery_disease,
            appetite: form.appetite,
            pedal_edema: form.pedal_edema,
            anemia: form.anemia,
        };

        violations.extend(record.validate());
        if violations.is_empty() {
            Ok(record)
        } else {
            Err(CoreError::OutOfDomain(violations))
        }
    }
}

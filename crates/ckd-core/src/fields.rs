//! Intake form field definitions.
//!
//! Describes every input the form collects, in form order, with its
//! permitted domain and initial value. Validation of a [`PatientRecord`]
//! is driven from this table.
//!
//! [`PatientRecord`]: crate::models::patient::PatientRecord

use serde::{Deserialize, Serialize};
use serde_json::json;
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::categorical::{Appetite, CellMorphology, Presence, YesNo};
use crate::models::specific_gravity::SpecificGravity;

/// The form section a field is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    BasicInfo,
    UrineTest,
    BloodTest,
    MedicalHistory,
}

/// Inclusive bounds for a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl FieldRange {
    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// How a field is entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Whole-number slider.
    Integer { range: FieldRange },
    /// Decimal slider.
    Decimal { range: FieldRange },
    /// Fixed-choice selector; options are wire values.
    Choice { options: Vec<serde_json::Value> },
}

impl FieldKind {
    pub fn range(&self) -> Option<&FieldRange> {
        match self {
            FieldKind::Integer { range } | FieldKind::Decimal { range } => Some(range),
            FieldKind::Choice { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub section: Section,
    pub kind: FieldKind,
    pub default: serde_json::Value,
}

/// All intake form fields, in form order.
pub fn all_fields() -> &'static [FieldSpec] {
    static FIELDS: std::sync::LazyLock<Vec<FieldSpec>> = std::sync::LazyLock::new(|| {
        use Section::*;

        vec![
            integer("age", "Age (years)", BasicInfo, 1, 100, 45),
            integer("blood_pressure", "Blood Pressure (mmHg)", BasicInfo, 50, 180, 80),
            FieldSpec {
                id: "specific_gravity".to_string(),
                label: "Specific Gravity".to_string(),
                section: BasicInfo,
                kind: FieldKind::Choice {
                    options: SpecificGravity::ALL.iter().map(|sg| json!(sg.value())).collect(),
                },
                default: json!(SpecificGravity::default().value()),
            },
            integer("albumin", "Albumin Level", BasicInfo, 0, 5, 1),
            integer("sugar", "Sugar Level", BasicInfo, 0, 5, 0),
            choice("red_blood_cells", "Red Blood Cells", UrineTest, CellMorphology::ALL.map(CellMorphology::as_str)),
            choice("pus_cell", "Pus Cell", UrineTest, CellMorphology::ALL.map(CellMorphology::as_str)),
            choice("pus_cell_clumps", "Pus Cell Clumps", UrineTest, Presence::ALL.map(Presence::as_str)),
            choice("bacteria", "Bacteria", UrineTest, Presence::ALL.map(Presence::as_str)),
            integer("blood_glucose_random", "Blood Glucose Random (mg/dl)", UrineTest, 70, 500, 120),
            integer("blood_urea", "Blood Urea (mg/dl)", BloodTest, 10, 200, 40),
            decimal("serum_creatinine", "Serum Creatinine (mg/dl)", BloodTest, 0.4, 15.0, 1.2),
            integer("sodium", "Sodium (mEq/L)", BloodTest, 110, 160, 135),
            decimal("potassium", "Potassium (mEq/L)", BloodTest, 2.0, 7.0, 4.5),
            decimal("hemoglobin", "Hemoglobin (g/dl)", BloodTest, 3.0, 17.0, 12.0),
            choice("hypertension", "Hypertension", MedicalHistory, YesNo::ALL.map(YesNo::as_str)),
            choice("diabetes_mellitus", "Diabetes Mellitus", MedicalHistory, YesNo::ALL.map(YesNo::as_str)),
            choice("coronary_artery_disease", "Coronary Artery Disease", MedicalHistory, YesNo::ALL.map(YesNo::as_str)),
            choice("appetite", "Appetite", MedicalHistory, Appetite::ALL.map(Appetite::as_str)),
            choice("pedal_edema", "Pedal Edema", MedicalHistory, YesNo::ALL.map(YesNo::as_str)),
            choice("anemia", "Anemia", MedicalHistory, YesNo::ALL.map(YesNo::as_str)),
        ]
    });
    &FIELDS
}

/// Look up a field by id.
pub fn get_field(id: &str) -> Result<&'static FieldSpec, CoreError> {
    all_fields()
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| CoreError::UnknownField(id.to_string()))
}

fn integer(id: &str, label: &str, section: Section, min: u32, max: u32, default: u32) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        label: label.to_string(),
        section,
        kind: FieldKind::Integer {
            range: FieldRange {
                min: f64::from(min),
                max: f64::from(max),
                step: Some(1.0),
            },
        },
        default: json!(default),
    }
}

fn decimal(id: &str, label: &str, section: Section, min: f64, max: f64, default: f64) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        label: label.to_string(),
        section,
        kind: FieldKind::Decimal {
            range: FieldRange {
                min,
                max,
                step: None,
            },
        },
        default: json!(default),
    }
}

/// The first option is the default, as on the form.
fn choice<const N: usize>(id: &str, label: &str, section: Section, options: [&str; N]) -> FieldSpec {
    FieldSpec {
        id: id.to_string(),
        label: label.to_string(),
        section,
        kind: FieldKind::Choice {
            options: options.iter().map(|o| json!(o)).collect(),
        },
        default: json!(options[0]),
    }
}

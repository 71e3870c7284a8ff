use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;

use ckd_core::models::patient::PatientRecord;
use ckd_export::report::format_report;
use ckd_risk::factors::RiskFactor;
use ckd_risk::guidance::{guidance, Guidance};
use ckd_risk::{contributing_factors, evaluate, RiskLevel};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct Prediction {
    pub score: u8,
    pub level: RiskLevel,
    pub label: &'static str,
    pub guidance: &'static Guidance,
    pub contributing_factors: Vec<&'static RiskFactor>,
    pub report: String,
}

/// Evaluate a record and return the verdict, its advisory text and the
/// report that would be downloaded.
pub async fn predict(
    payload: Result<Json<PatientRecord>, JsonRejection>,
) -> Result<Json<Prediction>, ApiError> {
    let Json(record) = payload?;

    let verdict = evaluate(&record);
    tracing::info!(score = verdict.score, level = ?verdict.level, "record evaluated");

    Ok(Json(Prediction {
        score: verdict.score,
        level: verdict.level,
        label: verdict.level.label(),
        guidance: guidance(verdict.level),
        contributing_factors: contributing_factors(&record),
        report: format_report(&record, &verdict),
    }))
}

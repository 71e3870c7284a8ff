use axum::Json;
use serde::Serialize;

use ckd_risk::factors::{risk_factors, RiskFactor};
use ckd_risk::{HIGH_RISK_THRESHOLD, MAX_SCORE};

#[derive(Serialize)]
pub struct FactorTable {
    threshold: u8,
    max_score: u8,
    factors: &'static [RiskFactor],
}

pub async fn list_factors() -> Json<FactorTable> {
    Json(FactorTable {
        threshold: HIGH_RISK_THRESHOLD,
        max_score: MAX_SCORE,
        factors: risk_factors(),
    })
}

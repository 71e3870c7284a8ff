use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;

use ckd_core::models::patient::PatientRecord;
use ckd_export::docx::{generate_docx, DOCX_CONTENT_TYPE, DOCX_FILE_NAME};
use ckd_export::report::{format_report, REPORT_CONTENT_TYPE, REPORT_FILE_NAME};
use ckd_risk::evaluate;

use crate::error::ApiError;
use crate::state::AppState;

/// Evaluate a record and return the plain-text report as a download.
pub async fn download_report(
    payload: Result<Json<PatientRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(record) = payload?;
    let report = format_report(&record, &evaluate(&record));

    Ok((
        attachment_headers(&format!("{REPORT_CONTENT_TYPE}; charset=utf-8"), REPORT_FILE_NAME),
        report,
    ))
}

/// Evaluate a record and return the report as a DOCX download.
pub async fn download_docx(
    State(state): State<AppState>,
    payload: Result<Json<PatientRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(record) = payload?;
    let report = format_report(&record, &evaluate(&record));
    let bytes = generate_docx(&report, &state.styles)?;

    Ok((attachment_headers(DOCX_CONTENT_TYPE, DOCX_FILE_NAME), bytes))
}

fn attachment_headers(content_type: &str, file_name: &str) -> [(header::HeaderName, String); 2] {
    [
        (header::CONTENT_TYPE, content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        ),
    ]
}

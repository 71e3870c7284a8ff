use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use ckd_server::app;
use ckd_server::state::AppState;

fn router() -> Router {
    app(AppState::default())
}

fn record(overrides: Value) -> Value {
    let mut base = json!({
        "age": 45,
        "blood_pressure": 80,
        "specific_gravity": 1.005,
        "albumin": 1,
        "sugar": 0,
        "red_blood_cells": "normal",
        "pus_cell": "normal",
        "pus_cell_clumps": "present",
        "bacteria": "present",
        "blood_glucose_random": 120,
        "blood_urea": 40,
        "serum_creatinine": 1.2,
        "sodium": 135,
        "potassium": 4.5,
        "hemoglobin": 12.0,
        "hypertension": "no",
        "diabetes_mellitus": "no",
        "coronary_artery_disease": "no",
        "appetite": "good",
        "pedal_edema": "no",
        "anemia": "no"
    });
    if let (Some(base), Some(overrides)) = (base.as_object_mut(), overrides.as_object()) {
        for (k, v) in overrides {
            base.insert(k.clone(), v.clone());
        }
    }
    base
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn health() {
    let response = router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "ok" }));
}

#[tokio::test]
async fn lists_form_fields() {
    let response = router()
        .oneshot(Request::get("/fields").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fields = body_json(response).await;
    assert_eq!(fields.as_array().unwrap().len(), 21);
    assert_eq!(fields[0]["id"], "age");
    assert_eq!(fields[0]["section"], "basic_info");
}

#[tokio::test]
async fn unknown_field_is_not_found() {
    let response = router()
        .oneshot(Request::get("/fields/egfr").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "field not found: egfr");
}

#[tokio::test]
async fn lists_risk_factors() {
    let response = router()
        .oneshot(Request::get("/factors").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let table = body_json(response).await;
    assert_eq!(table["threshold"], 4);
    assert_eq!(table["max_score"], 8);
    assert_eq!(table["factors"].as_array().unwrap().len(), 7);
    assert_eq!(table["factors"][0]["weight"], 2);
}

#[tokio::test]
async fn predicts_low_risk_for_healthy_record() {
    let response = router()
        .oneshot(post_json("/predict", &record(json!({}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let prediction = body_json(response).await;
    assert_eq!(prediction["score"], 0);
    assert_eq!(prediction["level"], "low_risk");
    assert_eq!(prediction["label"], "LOW RISK OF CKD");
    assert_eq!(prediction["guidance"]["heading"], "General Health Suggestions");
    assert_eq!(prediction["contributing_factors"], json!([]));
    assert!(
        prediction["report"]
            .as_str()
            .unwrap()
            .contains("Final Assessment  : LOW RISK OF CKD")
    );
}

#[tokio::test]
async fn predicts_high_risk_at_threshold() {
    let body = record(json!({
        "serum_creatinine": 1.6,
        "blood_urea": 51,
        "blood_pressure": 130,
        "hypertension": "yes"
    }));
    let response = router().oneshot(post_json("/predict", &body)).await.unwrap();

    let prediction = body_json(response).await;
    assert_eq!(prediction["score"], 4);
    assert_eq!(prediction["level"], "high_risk");
    assert_eq!(prediction["guidance"]["heading"], "Doctor Recommendation");
    let ids: Vec<&str> = prediction["contributing_factors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["elevated_creatinine", "elevated_urea", "hypertension"]);
}

#[tokio::test]
async fn out_of_domain_record_gets_no_verdict() {
    let body = record(json!({ "sodium": 200 }));
    let response = router().oneshot(post_json("/predict", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let error = body_json(response).await;
    assert!(error["error"].as_str().unwrap().contains("Sodium"));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let request = Request::post("/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn report_downloads_as_text_attachment() {
    let response = router()
        .oneshot(post_json("/report", &record(json!({ "age": 70 }))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain")
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"CKD_Report.txt\""
    );

    let text = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(text.starts_with("\nCHRONIC KIDNEY DISEASE MEDICAL REPORT\n"));
    assert!(text.contains("Age               : 70\n"));
}

#[tokio::test]
async fn report_downloads_as_docx() {
    let response = router()
        .oneshot(post_json("/report/docx", &record(json!({}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"CKD_Report.docx\""
    );
    let bytes = body_bytes(response).await;
    assert_eq!(&bytes[..2], b"PK");
}

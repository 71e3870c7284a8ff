//! ckd-server library root.
//!
//! HTTP boundary for the screening form: accepts a patient record, returns
//! the verdict with its advisory text, and serves the downloadable report.
//! The router is built here so integration tests can drive it in-process.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Form metadata
        .route("/fields", get(routes::fields::list_fields))
        .route("/fields/{id}", get(routes::fields::get_field_detail))
        .route("/factors", get(routes::factors::list_factors))
        // Evaluation
        .route("/predict", post(routes::predict::predict))
        .route("/report", post(routes::report::download_report))
        .route("/report/docx", post(routes::report::download_docx))
        .layer(
            ServiceBuilder::new()
                .layer(axum_mw::from_fn(middleware::audit::audit_log))
                .layer(cors),
        )
        .with_state(state)
}

use axum::extract::Path;
use axum::Json;

use ckd_core::fields::{all_fields, get_field, FieldSpec};

use crate::error::ApiError;

pub async fn list_fields() -> Json<&'static [FieldSpec]> {
    Json(all_fields())
}

pub async fn get_field_detail(Path(id): Path<String>) -> Result<Json<&'static FieldSpec>, ApiError> {
    Ok(Json(get_field(&id)?))
}

use thiserror::Error;

use crate::models::patient::FieldViolation;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("patient record out of domain: {}", summarize(.0))]
    OutOfDomain(Vec<FieldViolation>),

    #[error("unknown field: {0}")]
    UnknownField(String),
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

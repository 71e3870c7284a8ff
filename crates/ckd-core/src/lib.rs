//! ckd-core
//!
//! Pure domain types for chronic kidney disease screening: the patient
//! record collected by the intake form, its categorical vocabularies, and
//! the per-field domains the form enforces. No I/O.

pub mod error;
pub mod fields;
pub mod models;

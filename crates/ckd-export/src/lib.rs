//! ckd-export
//!
//! Screening report generation: the plain-text report offered for download,
//! and a DOCX rendering of the same content.

pub mod docx;
pub mod error;
pub mod report;
pub mod styles;

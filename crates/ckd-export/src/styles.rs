use serde::{Deserialize, Serialize};

/// Document styling configuration for DOCX reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for report rows. A monospace face keeps the `:` column aligned.
    pub body_font: String,

    /// Font for the report title.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub heading_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Courier New".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            heading_size: 16,
        }
    }
}

use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::report::REPORT_TITLE;
use crate::styles::DocumentStyles;

/// File name offered when the DOCX report is downloaded.
pub const DOCX_FILE_NAME: &str = "CKD_Report.docx";

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Generate a DOCX document from the plain-text report.
///
/// The report text maps onto the document as follows:
/// - the title line → Heading 1
/// - the dashed rule under the title → dropped
/// - `Label : value` → paragraph with a bold label
/// - blank line → empty paragraph
pub fn generate_docx(report: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new().add_style(
        Style::new("Heading1", StyleType::Paragraph)
            .name("heading 1")
            .size(styles.heading_size * 2), // OOXML uses half-points
    );

    // The report opens with a newline; skip it so the title leads the page.
    let mut rows = 0usize;
    for line in report.trim_start_matches('\n').lines() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
        } else if trimmed == REPORT_TITLE {
            docx = docx.add_paragraph(title_paragraph(trimmed, styles));
        } else if trimmed.chars().all(|c| c == '-') {
            continue;
        } else if let Some((label, value)) = trimmed.split_once(':') {
            docx = docx.add_paragraph(row_paragraph(label, value.trim(), styles));
            rows += 1;
        } else {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(body_run(trimmed, styles)),
            );
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    tracing::debug!(rows, size = bytes.len(), "docx report generated");
    Ok(bytes)
}

fn title_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .style("Heading1")
        .align(AlignmentType::Center)
        .add_run(
            Run::new()
                .add_text(text)
                .bold()
                .fonts(RunFonts::new().ascii(&styles.heading_font)),
        )
}

/// Keeps the label's padding so values line up in a monospace body font.
fn row_paragraph(label: &str, value: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(&format!("{label}: "), styles).bold())
        .add_run(body_run(value, styles))
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

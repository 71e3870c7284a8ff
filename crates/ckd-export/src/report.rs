use std::fmt::Write as _;

use ckd_core::models::patient::PatientRecord;
use ckd_risk::Verdict;

/// File name offered when the report is downloaded.
pub const REPORT_FILE_NAME: &str = "CKD_Report.txt";

/// MIME type of the downloadable report.
pub const REPORT_CONTENT_TYPE: &str = "text/plain";

pub const REPORT_TITLE: &str = "CHRONIC KIDNEY DISEASE MEDICAL REPORT";

const RULE: &str = "-----------------------------------";

/// Render the plain-text screening report.
///
/// Only the measurements that drive the score are listed, followed by the
/// final assessment. Pure: identical inputs give byte-identical output.
pub fn format_report(record: &PatientRecord, verdict: &Verdict) -> String {
    let rows: [(&str, String); 7] = [
        ("Age", record.age.to_string()),
        ("Blood Pressure", record.blood_pressure.to_string()),
        ("Blood Urea", record.blood_urea.to_string()),
        ("Serum Creatinine", decimal(record.serum_creatinine)),
        ("Hemoglobin", decimal(record.hemoglobin)),
        ("Diabetes", record.diabetes_mellitus.to_string()),
        ("Hypertension", record.hypertension.to_string()),
    ];

    let mut out = String::new();
    out.push('\n');
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    for (label, value) in &rows {
        push_row(&mut out, label, value);
    }
    out.push('\n');
    push_row(&mut out, "Final Assessment", verdict.level.label());
    out
}

fn push_row(out: &mut String, label: &str, value: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{label:<18}: {value}");
}

/// Decimal measurements always show a fractional part (`12.0`, not `12`).
fn decimal(value: f64) -> String {
    format!("{value:?}")
}

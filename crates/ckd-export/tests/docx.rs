use ckd_core::models::patient::PatientRecord;
use ckd_export::docx::generate_docx;
use ckd_export::report::format_report;
use ckd_export::styles::DocumentStyles;
use ckd_risk::evaluate;

#[test]
fn produces_a_zip_container() {
    let record = PatientRecord::default();
    let report = format_report(&record, &evaluate(&record));
    let bytes = generate_docx(&report, &DocumentStyles::default()).unwrap();
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn custom_styles_are_accepted() {
    let styles = DocumentStyles {
        body_font: "Consolas".to_string(),
        body_size: 10,
        ..DocumentStyles::default()
    };
    let bytes = generate_docx("\nCHRONIC KIDNEY DISEASE MEDICAL REPORT\nnote\n", &styles).unwrap();
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn styles_deserialize_from_json() {
    let styles: DocumentStyles = serde_json::from_str(
        r#"{"body_font":"Menlo","heading_font":"Helvetica","body_size":12,"heading_size":18}"#,
    )
    .unwrap();
    assert_eq!(styles.body_font, "Menlo");
    assert_eq!(styles.heading_size, 18);
}

use ckd_core::error::CoreError;
use ckd_core::fields::{all_fields, get_field, FieldKind, FieldRange, Section};
use ckd_core::models::patient::PatientRecord;

#[test]
fn form_collects_twenty_one_fields() {
    assert_eq!(all_fields().len(), 21);
}

#[test]
fn fields_are_grouped_in_form_order() {
    let sections: Vec<Section> = all_fields().iter().map(|f| f.section).collect();
    let mut sorted = sections.clone();
    sorted.sort_by_key(|s| *s as u8);
    assert_eq!(sections, sorted);
    assert_eq!(all_fields()[0].id, "age");
    assert_eq!(all_fields()[20].id, "anemia");
}

#[test]
fn field_defaults_match_default_record() {
    let record = serde_json::to_value(PatientRecord::default()).unwrap();
    for field in all_fields() {
        assert_eq!(record[&field.id], field.default, "default for {}", field.id);
    }
}

#[test]
fn every_field_is_a_record_member() {
    let record = serde_json::to_value(PatientRecord::default()).unwrap();
    let object = record.as_object().unwrap();
    assert_eq!(object.len(), all_fields().len());
    for field in all_fields() {
        assert!(object.contains_key(&field.id), "missing {}", field.id);
    }
}

#[test]
fn ranged_fields_expose_numeric_values() {
    let record = PatientRecord::default();
    for field in all_fields() {
        if field.kind.range().is_some() {
            assert!(record.numeric_value(&field.id).is_some(), "{}", field.id);
        }
    }
    assert_eq!(record.numeric_value("appetite"), None);
}

#[test]
fn lookup_by_id() {
    let field = get_field("serum_creatinine").unwrap();
    assert_eq!(field.label, "Serum Creatinine (mg/dl)");
    match &field.kind {
        FieldKind::Decimal { range } => {
            assert_eq!(range.min, 0.4);
            assert_eq!(range.max, 15.0);
        }
        other => panic!("expected decimal field, got {other:?}"),
    }
    assert!(matches!(get_field("eGFR"), Err(CoreError::UnknownField(_))));
}

#[test]
fn specific_gravity_is_a_numeric_choice() {
    let field = get_field("specific_gravity").unwrap();
    match &field.kind {
        FieldKind::Choice { options } => {
            assert_eq!(options.len(), 5);
            assert_eq!(options[0], serde_json::json!(1.005));
            assert_eq!(options[4], serde_json::json!(1.025));
        }
        other => panic!("expected choice field, got {other:?}"),
    }
}

#[test]
fn integer_range_requires_whole_steps() {
    let range = FieldRange {
        min: 0.0,
        max: 5.0,
        step: Some(1.0),
    };
    assert!(range.contains(0.0));
    assert!(range.contains(5.0));
    assert!(!range.contains(2.5));
    assert!(!range.contains(6.0));
}

#[test]
fn field_kind_serializes_tagged() {
    let value = serde_json::to_value(&get_field("age").unwrap().kind).unwrap();
    assert_eq!(value["kind"], "integer");
    assert_eq!(value["range"]["min"], 1.0);
    assert_eq!(value["range"]["max"], 100.0);
}

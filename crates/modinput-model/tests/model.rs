//! Tests for modinput-model types through the public API.

use std::collections::BTreeMap;

use modinput_model::{
    DataType, ModelError, ParamValue, ParameterDescriptor, Record, Severity, Timestamp,
    ValidationRequest,
};

#[test]
fn descriptor_json_defaults_match_builder() {
    let parsed: ParameterDescriptor = serde_json::from_str(r#"{"name": "interval"}"#).unwrap();
    assert_eq!(parsed, ParameterDescriptor::new("interval"));
    assert_eq!(parsed.data_type, Some(DataType::String));
}

#[test]
fn descriptor_json_reads_camel_case_fields() {
    let parsed: ParameterDescriptor = serde_json::from_str(
        r#"{"name": "n", "dataType": "BOOLEAN", "requiredOnEdit": true, "validation": ""}"#,
    )
    .unwrap();
    assert_eq!(parsed.data_type, Some(DataType::Boolean));
    assert!(parsed.required_on_edit);
    assert!(!parsed.required_on_create);
    assert_eq!(parsed.validation(), None);
}

#[test]
fn timestamp_on_record_is_normalized_once() {
    let record = Record::new("x").with_time(Timestamp::parse("1372187084.424242").unwrap());
    assert_eq!(record.time.as_ref().map(Timestamp::as_str), Some("1372187084.424"));
}

#[test]
fn empty_record_fails_validation() {
    assert_eq!(
        Record::default().validate(),
        Err(ModelError::MissingRequiredField { field: "data" })
    );
}

#[test]
fn validation_requests_compare_by_content() {
    let mut metadata = BTreeMap::new();
    metadata.insert("name".to_string(), "s".to_string());
    let mut parameters = BTreeMap::new();
    parameters.insert(
        "hosts".to_string(),
        ParamValue::List(vec!["a".to_string(), "b".to_string()]),
    );
    let left = ValidationRequest {
        metadata: metadata.clone(),
        parameters: parameters.clone(),
    };
    let right = ValidationRequest {
        metadata,
        parameters,
    };
    assert_eq!(left, right);
    assert_ne!(left, ValidationRequest::default());
}

#[test]
fn severities_order_by_verbosity() {
    let mut shuffled = vec![Severity::Debug, Severity::Fatal, Severity::Info];
    shuffled.sort();
    assert_eq!(shuffled, vec![Severity::Fatal, Severity::Info, Severity::Debug]);
    assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warn));
}

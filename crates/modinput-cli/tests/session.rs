//! Integration tests for the validate, describe and emit sessions.

use std::io::{self, BufReader, Read};

use modinput_cli::session::{EmitOptions, EmitSummary, ValidationOutcome, describe, emit, validate};

struct BrokenInput;

impl Read for BrokenInput {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("connection reset"))
    }
}

fn utf8(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

#[test]
fn test_validate_accepts_well_formed_request() {
    let xml = r#"<items><server_host>myHost</server_host><item name="myScheme"><param name="param1">value1</param></item></items>"#;
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let outcome = validate(xml.as_bytes(), &mut out, &mut err).unwrap();

    let ValidationOutcome::Accepted(request) = outcome else {
        panic!("expected acceptance");
    };
    assert_eq!(request.name(), Some("myScheme"));
    assert_eq!(request.metadata_value("server_host"), Some("myHost"));
    assert!(out.is_empty());
    assert_eq!(utf8(err), "INFO Configuration for myScheme is valid\n");
}

#[test]
fn test_validate_answers_malformed_request_with_error_document() {
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let outcome = validate("<items></items>".as_bytes(), &mut out, &mut err).unwrap();

    assert!(!outcome.is_accepted());
    let out = utf8(out);
    let err = utf8(err);
    assert!(out.starts_with("<error><message>Invalid configuration: "), "{out}");
    assert!(out.ends_with("</message></error>"), "{out}");
    assert!(err.starts_with("ERROR Invalid configuration: "), "{err}");
    assert!(err.ends_with('\n'));
}

#[test]
fn test_validate_propagates_read_failure() {
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let error = validate(BufReader::new(BrokenInput), &mut out, &mut err).unwrap_err();

    assert!(error.to_string().contains("read validation request"), "{error:#}");
    assert!(format!("{error:#}").contains("connection reset"), "{error:#}");
    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn test_describe_writes_one_fragment_per_line() {
    let json = r#"[
        {"name": "interval", "dataType": "NUMBER", "requiredOnCreate": true},
        {"name": "pattern", "description": "regex"}
    ]"#;
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let count = describe(json.as_bytes(), &mut out, &mut err).unwrap();

    assert_eq!(count, 2);
    let out = utf8(out);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(out.ends_with('\n'));
    insta::assert_snapshot!(lines[0], @r#"<arg name="interval"><data_type>number</data_type><required_on_create>true</required_on_create></arg>"#);
    insta::assert_snapshot!(lines[1], @r#"<arg name="pattern"><description/><data_type>string</data_type></arg>"#);
    assert!(err.is_empty());
}

#[test]
fn test_describe_rejects_empty_name() {
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let error = describe(r#"[{"name": "a"}, {"name": ""}]"#.as_bytes(), &mut out, &mut err)
        .unwrap_err();

    assert!(error.to_string().contains("#2"), "{error}");
    assert!(out.is_empty());
}

#[test]
fn test_describe_rejects_malformed_json() {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    assert!(describe("{".as_bytes(), &mut out, &mut err).is_err());
}

#[test]
fn test_emit_streams_lines_inside_one_envelope() {
    let options = EmitOptions {
        stanza: "tail://app".to_string(),
        index: Some("main".to_string()),
        ..EmitOptions::default()
    };
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let summary = emit("first\nsecond\n".as_bytes(), &options, &mut out, &mut err).unwrap();

    assert_eq!(
        summary,
        EmitSummary {
            written: 2,
            rejected: 0
        }
    );
    let out = utf8(out);
    assert!(out.starts_with("<stream><event stanza=\"tail://app\">"), "{out}");
    assert_eq!(out.matches("<stream>").count(), 1);
    assert_eq!(out.matches("<event ").count(), 2);
    assert!(out.contains("<data>first</data><index>main</index>"));
    assert!(out.contains("<data>second</data><index>main</index>"));
    assert!(!out.contains("</stream>"));
    assert!(err.is_empty());
}

#[test]
fn test_emit_reports_empty_lines_and_continues() {
    let options = EmitOptions {
        stanza: "tail://app".to_string(),
        ..EmitOptions::default()
    };
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let summary = emit("a\n\nb\n".as_bytes(), &options, &mut out, &mut err).unwrap();

    assert_eq!(summary.written, 2);
    assert_eq!(summary.rejected, 1);
    let err = utf8(err);
    assert!(err.starts_with("WARN Rejected record: "), "{err}");
    assert_eq!(err.lines().count(), 1);
    assert_eq!(utf8(out).matches("<event ").count(), 2);
}

#[test]
fn test_emit_escapes_markup_in_lines() {
    let options = EmitOptions {
        stanza: "s".to_string(),
        ..EmitOptions::default()
    };
    let (mut out, mut err) = (Vec::new(), Vec::new());

    emit("<b>&</b>\n".as_bytes(), &options, &mut out, &mut err).unwrap();

    assert!(utf8(out).contains("<data>&lt;b&gt;&amp;&lt;/b&gt;</data>"));
}

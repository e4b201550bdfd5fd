//! Edge cases: heterogeneous records, nested values, alternate encodings

use pretty_assertions::assert_eq;
use sgpaconv::conversion::{CellEncoding, ConversionEngine, HeaderStrategy};
use sgpaconv::ConversionConfig;

fn engine(config: ConversionConfig) -> ConversionEngine {
    ConversionEngine::new(config)
}

#[test]
fn test_later_only_fields_are_dropped_with_first_record_header() {
    let document = engine(ConversionConfig::default())
        .convert_string(r#"[{"rollNo": "Z9"}, {"rollNo": "A1", "phone": "555"}]"#)
        .unwrap();

    assert!(!document.content.contains("phone"));
    assert!(!document.content.contains("555"));
}

#[test]
fn test_union_header_keeps_later_only_fields() {
    let config = ConversionConfig {
        header_strategy: HeaderStrategy::Union,
        ..Default::default()
    };
    let document = engine(config)
        .convert_string(r#"[{"rollNo": "Z9"}, {"rollNo": "A1", "phone": "555"}]"#)
        .unwrap();

    let lines: Vec<&str> = document.content.lines().collect();
    assert!(lines[0].starts_with("rollNo,phone,SGPA_sem1"));
    assert!(lines[1].starts_with(r#""Z9","","#));
    assert!(lines[2].starts_with(r#""A1","555","#));
}

#[test]
fn test_value_kinds_in_json_cells() {
    let document = engine(ConversionConfig::default())
        .convert_string(
            r#"[{"rollNo": 42, "active": true, "note": null, "tags": ["a", "b"], "addr": {"city": "Pune"}}]"#,
        )
        .unwrap();

    let row = document.content.lines().nth(1).unwrap();
    assert!(row.starts_with(
        r#""42","true","","[\"a\",\"b\"]","{\"city\":\"Pune\"}","#
    ));
}

#[test]
fn test_interior_quotes_json_vs_rfc4180() {
    let input = r#"[{"rollNo": "A1", "name": "O\"Neil, Pat", "SGPA": {"sem1": 8}, "instituteName": "IIT"}]"#;

    let json_row = engine(ConversionConfig::default())
        .convert_string(input)
        .unwrap()
        .content
        .lines()
        .nth(1)
        .unwrap()
        .to_string();
    assert_eq!(json_row, r#""A1","O\"Neil, Pat","8","","","","","","","","IIT""#);

    let config = ConversionConfig {
        cell_encoding: CellEncoding::Rfc4180,
        ..Default::default()
    };
    let rfc_row = engine(config)
        .convert_string(input)
        .unwrap()
        .content
        .lines()
        .nth(1)
        .unwrap()
        .to_string();
    assert_eq!(rfc_row, r#"A1,"O""Neil, Pat",8,,,,,,,,IIT"#);
}

#[test]
fn test_unicode_is_kept_verbatim() {
    let document = engine(ConversionConfig::default())
        .convert_string(r#"[{"rollNo": "Ä1", "name": "Żółć", "instituteName": "दिल्ली"}]"#)
        .unwrap();

    assert!(document.content.contains(r#""Żółć""#));
    assert!(document.content.ends_with(r#""दिल्ली""#));
}

#[test]
fn test_records_without_roll_numbers_sort_last() {
    let document = engine(ConversionConfig::default())
        .convert_string(r#"[{"name": "x"}, {"rollNo": "A1", "name": "y"}]"#)
        .unwrap();

    let lines: Vec<&str> = document.content.lines().collect();
    assert_eq!(lines[0].split(',').next(), Some("rollNo"));
    assert!(lines[2].starts_with(r#""","x""#));
}

#[test]
fn test_non_object_sgpa_is_treated_as_absent() {
    let document = engine(ConversionConfig::default())
        .convert_string(r#"[{"rollNo": "A1", "SGPA": [8.5, 9.0]}]"#)
        .unwrap();

    let row = document.content.lines().nth(1).unwrap();
    assert_eq!(row, r#""A1","","","","","","","","","""#);
}

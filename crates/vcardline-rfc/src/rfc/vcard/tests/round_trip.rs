//! Round-trip reading and writing tests for vCard content lines.
//!
//! These tests verify that records can be read, written back, and read again
//! without losing any part of a content line.

use pretty_assertions::assert_eq;

use super::fixtures::*;
use crate::rfc::vcard::build::VCardWriter;
use crate::rfc::vcard::core::ContentLine;
use crate::rfc::vcard::parse::{ReadError, read_all};
use crate::rfc::vcard::values::{split_text_list, unescape_text};

fn write_all(lines: &[ContentLine]) -> Result<String, String> {
    let mut writer = VCardWriter::new(Vec::new());
    writer.write_begin().map_err(|e| e.to_string())?;
    for line in lines {
        writer
            .write_content_line(line)
            .map_err(|e| format!("Write of {line} failed: {e}"))?;
    }
    writer.write_end().map_err(|e| e.to_string())?;

    let bytes = writer.close().map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Read a record, write it, then read again and compare.
fn round_trip(input: &str) -> Result<(), String> {
    let first = read_all(input).map_err(|e| format!("First read failed: {e}"))?;
    let written = write_all(&first)?;
    let second = read_all(&written).map_err(|e| format!("Second read failed: {e}\n{written}"))?;

    if first != second {
        return Err(format!("Content lines differ:\n{first:#?}\nvs\n{second:#?}"));
    }

    Ok(())
}

#[test]
fn round_trip_author_vcard() {
    round_trip(VCARD_AUTHOR).expect("round trip should succeed");
}

#[test]
fn round_trip_basic_vcard() {
    round_trip(VCARD_BASIC).expect("round trip should succeed");
}

#[test]
fn round_trip_grouped() {
    round_trip(VCARD_GROUPED).expect("round trip should succeed");
}

#[test]
fn round_trip_folded() {
    round_trip(VCARD_FOLDED).expect("round trip should succeed");
}

#[test]
fn round_trip_escaped() {
    round_trip(VCARD_ESCAPED).expect("round trip should succeed");
}

#[test]
fn round_trip_lf_only() {
    round_trip(VCARD_LF_ONLY).expect("round trip should succeed");
}

#[test]
fn author_vcard_structure() {
    let lines = read_all(VCARD_AUTHOR).unwrap();
    assert_eq!(lines.len(), 16);

    let tel = lines.iter().find(|l| l.is_named("tel")).unwrap();
    assert_eq!(tel.pref(), Some(1));
    assert_eq!(tel.get_param_value("TYPE"), Some("work,voice"));
    assert_eq!(tel.value, "tel:+1-418-656-9254;ext=102");

    let adr = lines.iter().find(|l| l.is_named("ADR")).unwrap();
    assert_eq!(adr.value, ";Suite D2-630;2875 Laurier;Quebec;QC;G1V 2M2;Canada");
}

#[test]
fn grouped_structure() {
    let lines = read_all(VCARD_GROUPED).unwrap();

    let grouped: Vec<_> = lines
        .iter()
        .filter(|l| l.group.as_deref() == Some("item1"))
        .map(|l| l.name.as_str())
        .collect();
    assert_eq!(grouped, vec!["TEL", "X-ABLABEL"]);
    assert!(lines[1].has_type("VOICE"));
}

#[test]
fn folded_lines_are_merged() {
    let lines = read_all(VCARD_FOLDED).unwrap();

    assert_eq!(
        lines[1].value,
        "This is a long note that has been folded across more than one physical line of the vCard stream."
    );
    assert_eq!(lines[2].get_param_value("X-PARAM"), Some("a;b:c"));
    assert_eq!(lines[2].value, "value");
    assert_eq!(lines[3].value, "日本語のメモ");
}

#[test]
fn escaped_values_stay_raw() {
    let lines = read_all(VCARD_ESCAPED).unwrap();

    assert_eq!(lines[1].value, "Hello\\, World\\; line one\\nline two");
    assert_eq!(
        unescape_text(&lines[1].value),
        "Hello, World; line one\nline two"
    );
    assert_eq!(
        split_text_list(&lines[2].value),
        vec!["work", "friends, close"]
    );
    assert_eq!(
        lines[3].get_param_value("X-P"),
        Some("semi;colon:comma,")
    );
    assert_eq!(lines[4].get_param_value("SORT-AS"), Some("Acme, Inc."));
}

#[test]
fn lf_only_input() {
    let lines = read_all(VCARD_LF_ONLY).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].value, "folded value");
}

#[test]
fn written_output_uses_crlf_and_short_lines() {
    let lines = read_all(VCARD_FOLDED).unwrap();
    let written = write_all(&lines).unwrap();

    assert!(written.ends_with("END:VCARD\r\n"));
    for physical in written.split("\r\n") {
        assert!(physical.len() <= 75, "{physical:?} is too long");
        assert!(!physical.contains('\n'));
    }
}

#[test]
fn version_3_rejected() {
    let err = read_all(VCARD_V3).unwrap_err();
    assert!(matches!(err, ReadError::Envelope { line: 2, .. }));
}

#[test]
fn missing_end_rejected() {
    let err = read_all(VCARD_NO_END).unwrap_err();
    assert!(matches!(err, ReadError::MissingEnd { .. }));
}

#[test]
fn missing_colon_rejected() {
    let err = read_all(VCARD_MISSING_COLON).unwrap_err();
    assert!(matches!(err, ReadError::Grammar { line: 4, .. }));
}

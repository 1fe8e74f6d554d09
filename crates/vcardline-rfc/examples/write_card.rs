//! Example writing a vCard 4.0 record and reading it back.
//!
//! Shows folding of a long NOTE, parameter quoting, and typed values.
//!
//! Run with: `cargo run --package vcardline-rfc --example write_card`

use chrono::Utc;
use vcardline_rfc::error::RfcResult;
use vcardline_rfc::rfc::vcard::core::{ContentLine, VCardParameter};
use vcardline_rfc::rfc::vcard::values::unescape_text;
use vcardline_rfc::rfc::vcard::{VCardReader, VCardWriter, ValueType};

fn main() -> RfcResult<()> {
    println!("=== Writing a vCard 4.0 record ===\n");

    let mut writer = VCardWriter::new(Vec::new());
    writer.write_begin()?;

    writer.start_line(None, "FN")?;
    writer.write_text_value("Jane Doe")?;
    writer.end_line()?;

    writer.start_line(Some("item1"), "TEL")?;
    writer.write_type_parameter("home", &["voice"])?;
    writer.write_value_type_parameter(ValueType::Uri)?;
    writer.write_uri_value("tel:+1-555-0100")?;
    writer.end_line()?;

    writer.start_line(None, "NOTE")?;
    writer.write_language_parameter("en")?;
    writer.write_text_value(
        "Met at the conference in Montréal, where we talked about line folding; \
         follow up next week.",
    )?;
    writer.end_line()?;

    writer.write_content_line(
        &ContentLine::new("ORG", "Acme\\, Inc.")
            .with_param(VCardParameter::sort_as(vec!["Acme, Inc.".to_string()])),
    )?;

    writer.start_line(None, "REV")?;
    writer.write_timestamp_value(&Utc::now())?;
    writer.end_line()?;

    writer.write_end()?;

    let bytes = writer.close()?;
    let output = String::from_utf8_lossy(&bytes);
    println!("{output}");

    println!("=== Reading it back ===\n");

    let mut reader = VCardReader::open(bytes.as_slice())?;
    while reader.read()? {
        let Some(line) = reader.content_line() else {
            continue;
        };
        println!(
            "line {:>2}: {:<6} params={} value={:?}",
            reader.line_number(),
            line.name,
            line.params.len(),
            unescape_text(&line.value)
        );
    }

    Ok(())
}

//! Export tests for the Markdown subset (line records → raw text)

use insta::assert_snapshot;
use linemark::format::Format;
use linemark::formats::markdown::MarkdownFormat;
use linemark::{FormatError, LineRecord, PatternRule, RuleTable, Tag};

#[test]
fn heading_record_snapshot() {
    let records = vec![LineRecord::new(0, Tag::Heading1, "My name is Mohit.")];
    let out = linemark::serialize(&records).expect("standard table covers every tag");
    assert_snapshot!(out, @"# My name is Mohit.");
}

#[test]
fn code_record_snapshot() {
    let records = vec![LineRecord::new(0, Tag::Code, "undefined < undefined // false")];
    let out = linemark::serialize(&records).expect("standard table covers every tag");
    assert_snapshot!(out, @"```undefined < undefined // false```");
}

#[test]
fn document_blocks_are_blank_line_separated() {
    let records = vec![
        LineRecord::new(0, Tag::Heading1, "My name is Mohit."),
        LineRecord::new(1, Tag::Heading2, "My name is actually not Mohit."),
        LineRecord::new(2, Tag::Paragraph, "Lorem Ipsum."),
        LineRecord::new(3, Tag::Code, "undefined < undefined // false"),
    ];
    let out = linemark::serialize(&records).expect("standard table covers every tag");
    assert_eq!(
        out,
        "# My name is Mohit.\n\n## My name is actually not Mohit.\n\nLorem Ipsum.\n\n```undefined < undefined // false```"
    );
}

#[test]
fn serializing_through_the_format_trait() {
    let format = MarkdownFormat::default();
    let records = vec![LineRecord::new(0, Tag::Heading2, "Subtitle")];
    assert_eq!(format.serialize(&records).expect("serializes"), "## Subtitle");
}

#[test]
fn tag_outside_the_table_is_a_contract_violation() {
    let table = RuleTable::new(vec![
        PatternRule::new("# ", Tag::Heading1, ""),
        PatternRule::new("", Tag::Paragraph, ""),
    ])
    .expect("table ends in a catch-all");
    let format = MarkdownFormat::with_table(table);

    let records = vec![LineRecord::new(0, Tag::Code, "orphan")];
    match format.serialize(&records) {
        Err(FormatError::RuleTableIntegrity(msg)) => {
            assert!(msg.contains("code"), "message should name the tag: {msg}");
        }
        other => panic!("expected integrity error, got {other:?}"),
    }
}

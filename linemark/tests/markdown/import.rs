//! Import tests for the Markdown subset (raw text → line records)
//!
//! These tests verify classification against the standard dialect table and
//! against caller-supplied alternate tables.

use linemark::format::Format;
use linemark::formats::markdown::MarkdownFormat;
use linemark::{LineRecord, PatternRule, RuleTable, Tag};

#[test]
fn parses_a_whole_document() {
    let source = "\
# My name is Mohit.

## My name is actually not Mohit.

Lorem Ipsum is simply dummy text of the printing and typesetting industry.

```undefined < undefined // false```";

    let records = linemark::parse(source);

    assert_eq!(
        records,
        vec![
            LineRecord::new(0, Tag::Heading1, "My name is Mohit."),
            LineRecord::new(1, Tag::Heading2, "My name is actually not Mohit."),
            LineRecord::new(
                2,
                Tag::Paragraph,
                "Lorem Ipsum is simply dummy text of the printing and typesetting industry.",
            ),
            LineRecord::new(3, Tag::Code, "undefined < undefined // false"),
        ]
    );
}

#[test]
fn heading_precedence_resolves_the_prefix_trap() {
    let records = linemark::parse("## x");
    assert_eq!(records, vec![LineRecord::new(0, Tag::Heading2, "x")]);
}

#[test]
fn paragraph_preserves_leading_whitespace() {
    let records = linemark::parse("   leading space");
    assert_eq!(records[0].tag, Tag::Paragraph);
    assert_eq!(records[0].text, "   leading space");
}

#[test]
fn heading_strips_only_the_delimiter_region() {
    let records = linemark::parse("# title  ");
    assert_eq!(records[0].tag, Tag::Heading1);
    assert_eq!(records[0].text, "title  ");
}

#[test]
fn unterminated_fence_is_a_paragraph_with_raw_text() {
    let records = linemark::parse("```unterminated");
    assert_eq!(
        records,
        vec![LineRecord::new(0, Tag::Paragraph, "```unterminated")]
    );
}

#[test]
fn empty_string_parses_to_zero_records() {
    assert!(linemark::parse("").is_empty());
}

#[test]
fn whitespace_only_line_is_a_paragraph_not_a_blank() {
    // Only zero-length lines are filtered; a line of spaces still counts.
    let records = linemark::parse(" ");
    assert_eq!(records, vec![LineRecord::new(0, Tag::Paragraph, " ")]);
}

#[test]
fn numbering_runs_over_the_filtered_sequence() {
    let records = linemark::parse("\n\n# first\n\n\nsecond\n");
    let lines: Vec<usize> = records.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![0, 1]);
}

#[test]
fn every_record_carries_one_of_the_four_tags() {
    let source = "# a\n## b\nplain\n```c```\n```open\n   spaced\n#nospace";
    for record in linemark::parse(source) {
        assert!(matches!(
            record.tag,
            Tag::Heading1 | Tag::Heading2 | Tag::Paragraph | Tag::Code
        ));
    }
}

#[test]
fn hash_without_trailing_space_is_a_paragraph() {
    let records = linemark::parse("#nospace");
    assert_eq!(records[0].tag, Tag::Paragraph);
    assert_eq!(records[0].text, "#nospace");
}

#[test]
fn alternate_dialect_tables_are_injectable() {
    let table = RuleTable::new(vec![
        PatternRule::new("!! ", Tag::Heading2, ""),
        PatternRule::new("! ", Tag::Heading1, ""),
        PatternRule::new("~~~", Tag::Code, "~~~"),
        PatternRule::new("", Tag::Paragraph, ""),
    ])
    .expect("alternate table ends in a catch-all");
    let format = MarkdownFormat::with_table(table);

    let records = format.parse("! title\n\n~~~let x = 1;~~~").expect("parsing is total");
    assert_eq!(
        records,
        vec![
            LineRecord::new(0, Tag::Heading1, "title"),
            LineRecord::new(1, Tag::Code, "let x = 1;"),
        ]
    );

    // The standard delimiters mean nothing to the alternate dialect.
    let records = format.parse("# not a heading here").expect("parsing is total");
    assert_eq!(records[0].tag, Tag::Paragraph);
}

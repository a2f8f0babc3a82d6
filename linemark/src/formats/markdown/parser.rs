//! Markdown parsing (Markdown subset → line records)
//!
//! Pipeline: raw text → line split → blank filter → per-line classification
//! against the rule table.
//!
//! Parsing is total. The catch-all paragraph rule matches every line, so no
//! input can fail to classify and this module has no error path.

use crate::record::{LineRecord, Tag};
use crate::rules::{PatternRule, RuleTable};

/// Parse raw text into line records.
///
/// Lines are split on `'\n'`. Zero-length lines are dropped before numbering:
/// a blank line contributes no record and no line-number slot. Surviving
/// lines are numbered 0-indexed in source order.
pub fn parse_from_markdown(table: &RuleTable, source: &str) -> Vec<LineRecord> {
    source
        .split('\n')
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(index, line)| classify_line(table, index, line))
        .collect()
}

/// Classify one non-empty line against the table.
fn classify_line(table: &RuleTable, index: usize, line: &str) -> LineRecord {
    // Leading whitespace does not stop Markdown from recognizing a pattern,
    // so matching runs on the start-trimmed form.
    let trimmed = line.trim_start();
    let rule = table.first_match(trimmed);

    LineRecord {
        line: index,
        tag: rule.tag,
        text: extract_text(rule, line, trimmed),
    }
}

/// Strip the matched rule's delimiters.
///
/// Paragraph text is the raw line, leading whitespace intact. For every
/// other tag the start delimiter comes off the trimmed line, then the end
/// delimiter comes off the remainder if it still carries one. A line that is
/// nothing but the delimiter (a bare fence) collapses to empty text.
fn extract_text(rule: &PatternRule, line: &str, trimmed: &str) -> String {
    if rule.tag == Tag::Paragraph {
        return line.to_string();
    }

    let body = trimmed.strip_prefix(rule.start.as_str()).unwrap_or(trimmed);
    let body = body.strip_suffix(rule.end.as_str()).unwrap_or(body);
    body.to_string()
}

//! HTML serialization (line records → preview HTML fragment)

use crate::record::{LineRecord, Tag};

/// Render line records as an HTML fragment, one element per line.
pub fn serialize_to_html(records: &[LineRecord]) -> String {
    records
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Map one record to its display element.
///
/// Exhaustive over the closed tag range; a new tag must pick an element here
/// before the crate compiles again.
fn render_record(record: &LineRecord) -> String {
    let text = escape_html(&record.text);
    match record.tag {
        Tag::Heading1 => format!("<h1>{text}</h1>"),
        Tag::Heading2 => format!("<h2>{text}</h2>"),
        Tag::Paragraph => format!("<p class=\"linemark-p\">{text}</p>"),
        Tag::Code => format!("<code class=\"linemark-code\">{text}</code>"),
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\"', "&quot;")
        .replace('\'', "&apos;")
}

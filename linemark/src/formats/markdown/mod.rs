//! Markdown format implementation
//!
//! This module implements bidirectional conversion between the linemark
//! Markdown subset and line records. It is the only format that owns a rule
//! table; both directions run against the same table instance, so they agree
//! on delimiter shape by construction.
//!
//! # Element Mapping Table
//!
//! | Record tag | Markdown line          | Parse notes                              | Serialize notes            |
//! |------------|------------------------|------------------------------------------|----------------------------|
//! | h1         | `# text`               | Prefix stripped, trailing text kept      | `# ` + text                |
//! | h2         | `## text`              | Checked before h1 (prefix trap)          | `## ` + text               |
//! | code       | ```` ```text``` ````   | Both fences must be present on the line  | Fences re-wrapped          |
//! | p          | any other line         | Raw line kept verbatim, whitespace too   | Text emitted unchanged     |
//!
//! # Dialect Rules
//!
//! - One record per non-empty line; blank lines carry no content and are
//!   dropped before numbering.
//! - Leading whitespace never prevents a pattern from being recognized;
//!   matching runs on the start-trimmed line. Paragraphs are the exception:
//!   their text is the raw line, whitespace preserved.
//! - A line that opens a fence without closing it on the same line is a
//!   paragraph. There is no multi-line fence accumulation; every line
//!   classifies independently.
//! - Serialization joins blocks with one blank line. Round-trip equivalence
//!   is therefore at the record level (tag and text), not character level.
//!
//! # Library Choice
//!
//! No Markdown engine. The dialect is four anchored line patterns; a
//! CommonMark parser would accept a far wider grammar and break the
//! closed-table guarantee that serialization can invert every parse.

pub mod parser;
pub mod serializer;

pub use parser::parse_from_markdown;
pub use serializer::serialize_to_markdown;

use crate::error::FormatError;
use crate::format::Format;
use crate::record::LineRecord;
use crate::rules::RuleTable;

/// Format implementation for the linemark Markdown subset
pub struct MarkdownFormat {
    table: RuleTable,
}

impl MarkdownFormat {
    /// Markdown format over the standard dialect table.
    pub fn new() -> Self {
        Self {
            table: RuleTable::standard().clone(),
        }
    }

    /// Markdown format over an alternate dialect table.
    pub fn with_table(table: RuleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RuleTable {
        &self.table
    }
}

impl Default for MarkdownFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "linemark Markdown subset: h1/h2 headings, paragraphs, single-line fenced code"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<LineRecord>, FormatError> {
        Ok(parse_from_markdown(&self.table, source))
    }

    fn serialize(&self, records: &[LineRecord]) -> Result<String, FormatError> {
        serialize_to_markdown(&self.table, records)
    }
}

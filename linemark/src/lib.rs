//! Bidirectional conversion for the linemark Markdown subset
//!
//!     This crate converts between raw text in a restricted Markdown dialect (level-1
//!     heading, level-2 heading, paragraph, fenced code) and a flat sequence of typed
//!     line records. The record sequence is the exchange schema: an editing surface
//!     hands raw text to the parser and gets records back, a preview surface hands
//!     records to a serializer and gets text back. Nothing in between is stateful.
//!
//!     This is a pure lib, that is, it powers interactive front ends but is shell
//!     agnostic: no code here supposes a shell environment, be it std print, env vars
//!     etc.
//!
//! Architecture
//!
//!     The whole dialect is data: an ordered table of (start delimiter, tag, end
//!     delimiter) rules (./rules.rs). The parser and the serializer both consult the
//!     same table, so the two directions can never disagree about delimiter shape.
//!     The table ends in a catch-all paragraph rule with empty delimiters, which makes
//!     parsing total: every non-empty line classifies as something, malformed input
//!     included.
//!
//!     The file structure:
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── record.rs               # LineRecord / Tag, the exchange schema
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── rules.rs                # PatternRule / RuleTable, the dialect as data
//!     ├── formats
//!     │   ├── markdown
//!     │   │   ├── parser.rs       # raw text → records
//!     │   │   ├── serializer.rs   # records → raw text
//!     │   │   └── mod.rs
//!     │   ├── html
//!     │   │   ├── serializer.rs   # records → preview HTML fragment
//!     │   │   └── mod.rs
//!     ├── lib.rs
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need
//!     to include these in the mod.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait. Formats
//!     should have a parse() and serialize() method, a name and file extensions. See
//!     the trait def [./format.rs]
//!     - Format trait: uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: centralized discovery and selection of formats
//!     - Format implementations: markdown (both directions), html (serialize only)
//!
//! Format Selection
//!
//!     - Markdown: the dialect itself, both in and out. This is the wire format.
//!     - HTML: out only, for preview rendering. Parsing HTML back is out of scope;
//!       the preview is a one-way projection of the records.
//!
//! Library Choices
//!
//!     No CommonMark engine. The dialect is four anchored line patterns with no
//!     inline formatting and no nesting, so a real Markdown parser would widen the
//!     grammar rather than implement it. Matching is plain prefix/suffix tests
//!     against the rule table, which keeps the table the single source of truth
//!     for both directions.

pub mod error;
pub mod format;
pub mod formats;
pub mod record;
pub mod registry;
pub mod rules;

pub use error::FormatError;
pub use format::Format;
pub use formats::{HtmlFormat, MarkdownFormat};
pub use record::{LineRecord, Tag};
pub use registry::FormatRegistry;
pub use rules::{PatternRule, RuleTable};

/// Parses raw text with the standard dialect table.
///
/// Total: every non-empty line yields a record, blank lines yield nothing.
/// Callers that need an alternate dialect should go through
/// [`formats::markdown::parse_from_markdown`] with their own table.
pub fn parse(source: &str) -> Vec<LineRecord> {
    formats::markdown::parse_from_markdown(RuleTable::standard(), source)
}

/// Serializes line records back to raw text with the standard dialect table.
///
/// Fails only on a configuration-integrity violation: a record whose tag has
/// no rule in the table. With records produced by [`parse`] this cannot
/// happen.
pub fn serialize(records: &[LineRecord]) -> Result<String, FormatError> {
    formats::markdown::serialize_to_markdown(RuleTable::standard(), records)
}

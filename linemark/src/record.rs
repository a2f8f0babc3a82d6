//! The line-record schema exchanged between parser and serializer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Block kind of a single line, a closed enumeration.
///
/// The serde names ("h1", "h2", "p", "code") are the wire names used when
/// records cross a serialization boundary, and the names the configuration
/// layer uses in dialect tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    #[serde(rename = "h1")]
    Heading1,
    #[serde(rename = "h2")]
    Heading2,
    #[serde(rename = "p")]
    Paragraph,
    #[serde(rename = "code")]
    Code,
}

impl Tag {
    /// The wire name of this tag.
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Heading1 => "h1",
            Tag::Heading2 => "h2",
            Tag::Paragraph => "p",
            Tag::Code => "code",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One classified line of a parsed document.
///
/// Records are flat and independent: no record owns another, and a parse
/// produces a fresh sequence every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// 0-indexed ordinal over the filtered (non-empty) line sequence of a
    /// single parse. Blank lines consume no slot. Unique within one parse
    /// result, not across parses.
    pub line: usize,
    /// The recognized block kind.
    pub tag: Tag,
    /// Content with delimiters stripped, or the raw line for paragraphs.
    pub text: String,
}

impl LineRecord {
    pub fn new(line: usize, tag: Tag, text: impl Into<String>) -> Self {
        Self {
            line,
            tag,
            text: text.into(),
        }
    }
}

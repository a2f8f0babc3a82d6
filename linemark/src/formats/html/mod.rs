//! HTML format implementation
//!
//! Serialize-only preview rendering of line records as an HTML fragment.
//! Parsing HTML back into records is out of scope: the preview is a one-way
//! projection, so `supports_parsing` stays false and the trait default
//! answers with NotSupported.
//!
//! # Element Mapping Table
//!
//! | Record tag | HTML element                     |
//! |------------|----------------------------------|
//! | h1         | `<h1>`                           |
//! | h2         | `<h2>`                           |
//! | p          | `<p class="linemark-p">`         |
//! | code       | `<code class="linemark-code">`   |
//!
//! The mapping is an exhaustive match over the closed tag enumeration.
//! Adding a tag without a display treatment is a compile error here, not a
//! logged fallback at runtime.

pub mod serializer;

pub use serializer::serialize_to_html;

use crate::error::FormatError;
use crate::format::Format;
use crate::record::LineRecord;

/// Format implementation for HTML preview output
#[derive(Debug, Default)]
pub struct HtmlFormat;

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML preview fragment, one element per record (serialization only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, records: &[LineRecord]) -> Result<String, FormatError> {
        Ok(serialize_to_html(records))
    }
}

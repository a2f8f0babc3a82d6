//! Markdown serialization (line records → Markdown subset)
//!
//! Each record is re-wrapped in the delimiters of its tag's rule and blocks
//! are joined with one blank line, the dialect's block separator. This is
//! deliberately not a character-level inverse of parsing: blank-line
//! structure is reconstructed, not replayed, so round-trip equivalence holds
//! at the record level.

use crate::error::FormatError;
use crate::record::LineRecord;
use crate::rules::RuleTable;

/// Serialize line records back to raw text.
///
/// The only failure is a configuration-integrity violation: a record whose
/// tag has no rule in the table. Records produced by the parser against the
/// same table always serialize.
pub fn serialize_to_markdown(
    table: &RuleTable,
    records: &[LineRecord],
) -> Result<String, FormatError> {
    let mut blocks = Vec::with_capacity(records.len());
    for record in records {
        let rule = table.rule_for_tag(record.tag)?;
        blocks.push(format!("{}{}{}", rule.start, record.text, rule.end));
    }
    Ok(blocks.join("\n\n"))
}

//! The pattern table: the dialect as an ordered list of delimiter rules
//!
//! Both conversion directions consult the same table. The parser walks it top
//! to bottom and takes the first rule whose delimiters enclose the line; the
//! serializer looks a rule up by tag and re-emits its delimiters. Because the
//! table is the single source of truth, parser and serializer can never
//! disagree about delimiter shape.
//!
//! Order is load-bearing: `"# "` is a prefix of `"## "`, so the level-2 rule
//! must sit above the level-1 rule or every level-2 heading would classify as
//! level 1. The final rule must be the catch-all (empty delimiters, paragraph
//! tag), which makes classification total.

use crate::error::FormatError;
use crate::record::Tag;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One entry of the dialect table: a start delimiter, the tag a match
/// produces, and an end delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    pub start: String,
    pub tag: Tag,
    pub end: String,
}

impl PatternRule {
    pub fn new(start: &str, tag: Tag, end: &str) -> Self {
        Self {
            start: start.to_string(),
            tag,
            end: end.to_string(),
        }
    }

    /// Whether both delimiters are empty. The catch-all matches every line.
    pub fn is_catch_all(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }

    /// Whether this rule's delimiters enclose the (already trimmed) line.
    pub fn matches(&self, trimmed: &str) -> bool {
        trimmed.starts_with(&self.start) && trimmed.ends_with(&self.end)
    }
}

static STANDARD: Lazy<RuleTable> = Lazy::new(|| {
    RuleTable::new(vec![
        PatternRule::new("## ", Tag::Heading2, ""),
        PatternRule::new("# ", Tag::Heading1, ""),
        PatternRule::new("```", Tag::Code, "```"),
        PatternRule::new("", Tag::Paragraph, ""),
    ])
    .expect("standard table ends in a catch-all")
});

/// Ordered dialect table, first structural match wins.
///
/// Construction enforces the totality invariant: the last rule must have
/// empty start and end delimiters. Everything else about the table is open;
/// tests and the configuration layer build alternate dialects freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<PatternRule>,
}

impl RuleTable {
    /// Builds a table, checking the catch-all invariant.
    pub fn new(rules: Vec<PatternRule>) -> Result<Self, FormatError> {
        match rules.last() {
            Some(rule) if rule.is_catch_all() => Ok(Self { rules }),
            _ => Err(FormatError::RuleTableIntegrity(
                "the last rule must have empty start and end delimiters".to_string(),
            )),
        }
    }

    /// The built-in dialect: h2, h1, fenced code, paragraph catch-all.
    pub fn standard() -> &'static RuleTable {
        &STANDARD
    }

    /// First rule enclosing the trimmed line. Total: the catch-all always
    /// matches, so this never fails for a table that passed [`RuleTable::new`].
    pub fn first_match(&self, trimmed: &str) -> &PatternRule {
        self.rules
            .iter()
            .find(|rule| rule.matches(trimmed))
            .expect("catch-all rule matches every line")
    }

    /// Rule to re-emit a record with the given tag. A miss is the
    /// configuration-integrity error: the record was built against a
    /// different dialect than the one serializing it.
    pub fn rule_for_tag(&self, tag: Tag) -> Result<&PatternRule, FormatError> {
        self.rules
            .iter()
            .find(|rule| rule.tag == tag)
            .ok_or_else(|| {
                FormatError::RuleTableIntegrity(format!("no rule for tag '{tag}' in the table"))
            })
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

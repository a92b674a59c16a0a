//! Line Scanner - pattern-based classification of grammar lines
//!
//! Two independent pure functions over a single line of text, composed into
//! whole-text passes:
//! 1. `line_literals` extracts every double-quoted keyword literal on a line
//! 2. `leading_identifier` tests for a bare rule-defining identifier at the
//!    start of a line
//!
//! A keyword literal is ASCII letters and underscores only; anything else
//! between the quotes (digits, spaces, other punctuation) disqualifies the
//! match. A rule head is letters only. The scanner never fails on grammar
//! content - lines that match nothing contribute nothing.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy-compiled pattern for double-quoted keyword literals
static KEYWORD_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([A-Za-z_]+)""#).unwrap());

/// Lazy-compiled pattern for a rule-defining identifier at line start
static RULE_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+").unwrap());

/// Extract every quoted keyword literal on one line, left to right,
/// with the quotes stripped. Matches are non-overlapping.
pub fn line_literals(line: &str) -> Vec<&str> {
    KEYWORD_LITERAL
        .captures_iter(line)
        .map(|caps| caps.get(1).unwrap().as_str())
        .collect()
}

/// The bare alphabetic identifier opening this line, if any.
///
/// A quoted literal at the start of a line is not a rule head; the quote
/// character stops the anchored match before it begins.
pub fn leading_identifier(line: &str) -> Option<&str> {
    RULE_HEAD.find(line).map(|m| m.as_str())
}

/// All keyword-literal occurrences in the grammar text, reading line by
/// line, left to right within a line, top to bottom across lines.
///
/// Repeats are preserved; deduplication belongs to the aggregation step.
pub fn scan_literals(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|line| line_literals(line).into_iter().map(str::to_owned))
        .collect()
}

/// One rule name per line that opens with a bare identifier, in line order.
/// Repeated names yield repeated entries.
pub fn scan_rule_names(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| leading_identifier(line).map(str::to_owned))
        .collect()
}

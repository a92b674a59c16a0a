//! Rule Collector - the ordered parser rule registry
//!
//! A direct pass-through over the scanner with a defined contract, so the
//! emitter consumes a stable interface instead of reaching into the scanner.
//! Rule order in every emitted artifact exactly matches declaration order in
//! the grammar text, and no deduplication is applied: each rule-defining
//! line yields one entry even when the name repeats. Raw declaration order
//! is the contract, not grammar semantics.

use crate::scan;

/// The ordered rule-name sequence for the grammar text.
pub fn collect(text: &str) -> Vec<String> {
    scan::scan_rule_names(text)
}

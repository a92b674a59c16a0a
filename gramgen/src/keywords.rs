//! Keyword Aggregator - merge grammar literals with the static categories
//!
//! The three static categories are configuration, not computed state: the
//! deployment enumerates the numeric type names, literal constants and
//! attribute tags its front-end reserves, and injects them here as ordered
//! lists. They are never inferred from the grammar text.

use serde::Deserialize;

/// The statically configured keyword categories, merged after the
/// grammar-derived literals in the order the fields are declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KeywordCategories {
    pub data_types: Vec<String>,
    pub constants: Vec<String>,
    pub tags: Vec<String>,
}

/// Build the final deduplicated keyword sequence.
///
/// Concatenates grammar-derived literals (discovery order), then data types,
/// then constants, then tags, skipping any keyword already present earlier
/// in the accumulated sequence. First occurrence wins; category order is the
/// tie-break.
pub fn aggregate(grammar_literals: &[String], categories: &KeywordCategories) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let sources = [
        grammar_literals,
        categories.data_types.as_slice(),
        categories.constants.as_slice(),
        categories.tags.as_slice(),
    ];
    for source in sources {
        for keyword in source {
            if !merged.iter().any(|seen| seen == keyword) {
                merged.push(keyword.clone());
            }
        }
    }
    merged
}

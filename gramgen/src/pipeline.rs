//! The two generation passes
//!
//! Each pass reads the grammar file exactly once, renders its artifacts in
//! memory and performs one whole-file write per artifact. The passes share
//! no state: they read the same immutable grammar and write disjoint output
//! files, so they may run in any order or in parallel processes, and
//! re-invocation at any time is an idempotent overwrite.

use crate::emit;
use crate::error::{GenError, GenResult};
use crate::keywords::{self, KeywordCategories};
use crate::rules;
use crate::scan;
use std::fs;
use std::path::Path;

fn read_grammar(path: &Path) -> GenResult<String> {
    fs::read_to_string(path).map_err(|source| GenError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Keyword pass: derive the merged keyword sequence and write the
/// pipe-delimited listing and the reserved-set declaration.
pub fn generate_keyword_artifacts(
    grammar: &Path,
    keyword_list: &Path,
    reserved_set: &Path,
    categories: &KeywordCategories,
) -> GenResult<()> {
    let text = read_grammar(grammar)?;
    let merged = keywords::aggregate(&scan::scan_literals(&text), categories);
    emit::write_artifact(keyword_list, &emit::render_keyword_list(&merged))?;
    emit::write_artifact(reserved_set, &emit::render_reserved_set(&merged))?;
    Ok(())
}

/// Parser pass: collect the ordered rule registry and write the rule-name
/// listing and the per-rule declaration table.
pub fn generate_parser_artifacts(
    grammar: &Path,
    parser_list: &Path,
    parser_members: &Path,
) -> GenResult<()> {
    let text = read_grammar(grammar)?;
    let rules = rules::collect(&text);
    emit::write_artifact(parser_list, &emit::render_parser_list(&rules))?;
    emit::write_artifact(parser_members, &emit::render_parser_members(&rules))?;
    Ok(())
}

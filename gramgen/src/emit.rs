//! Artifact Emitter - render the merged sequences into output text
//!
//! Four pure render functions and a single write helper. Every artifact is
//! produced as one complete write; order in the rendered text exactly
//! matches the sequences handed in, because downstream consumers are
//! bit-order-sensitive.

use crate::error::{GenError, GenResult};
use std::fs;
use std::path::Path;

/// The pipe-delimited keyword listing: `tok1|tok2|...|tokN` followed by
/// exactly one blank line.
pub fn render_keyword_list(keywords: &[String]) -> String {
    format!("{}\n\n", keywords.join("|"))
}

/// The reserved-word declaration consumed as compile-time literal data by
/// the front-end: one statement declaring an ordered, immutable collection
/// of quoted keyword literals.
pub fn render_reserved_set(keywords: &[String]) -> String {
    let quoted: Vec<String> = keywords.iter().map(|kw| format!("\"{}\"", kw)).collect();
    format!(
        "inline constexpr static auto RESERVED = {{{}}};",
        quoted.join(", ")
    )
}

/// The rule-name listing: all rule names under one symbolic name, in
/// collector order.
pub fn render_parser_list(rules: &[String]) -> String {
    format!("#define parsers {}\n", rules.join(", "))
}

/// The per-rule declaration table, the apply-to-each expansion idiom: the
/// application macro is defined, invoked once per rule name in order, then
/// undefined so the downstream build can re-expand the same table under a
/// different definition.
pub fn render_parser_members(rules: &[String]) -> String {
    let invocations: Vec<String> = rules.iter().map(|rule| format!("parser({});", rule)).collect();
    format!(
        "#define parser(p) mpc_parser_t* p{{mpc_new(#p)}}\n{}\n#undef parser",
        invocations.join(" ")
    )
}

/// Write one artifact as a whole-file overwrite.
pub fn write_artifact(path: &Path, contents: &str) -> GenResult<()> {
    fs::write(path, contents).map_err(|source| GenError::WriteArtifact {
        path: path.to_path_buf(),
        source,
    })
}

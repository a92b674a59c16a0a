//! Parser-pass generator binary
//!
//! Invoked with no arguments by the build, independently of the keyword
//! pass: both read the same immutable grammar file and write disjoint
//! artifacts, so the two binaries may run in either order or concurrently.
//! Exit status is zero on success, non-zero on any read or write failure.

use clap::Command;
use gramgen_config::{Loader, OVERRIDE_FILE};

fn main() {
    Command::new("gen-parsers")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Derive the parser rule listing and declaration table from the grammar file")
        .get_matches();

    let config = Loader::new()
        .with_optional_file(OVERRIDE_FILE)
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        });

    if let Err(e) = gramgen::generate_parser_artifacts(
        &config.input.grammar,
        &config.output.parser_list,
        &config.output.parser_members,
    ) {
        eprintln!("Generation error: {}", e);
        std::process::exit(1);
    }
}

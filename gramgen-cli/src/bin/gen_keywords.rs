//! Keyword-pass generator binary
//!
//! Invoked with no arguments by the build, before the front-end's lexer is
//! compiled. Reads the build-configured grammar file and overwrites the
//! keyword listing and the reserved-set declaration. Exit status is zero on
//! success; any read or write failure aborts with a non-zero status and
//! leaves no partial artifacts behind.

use clap::Command;
use gramgen_config::{Loader, OVERRIDE_FILE};

fn main() {
    Command::new("gen-keywords")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Derive the keyword listing and reserved-set declaration from the grammar file")
        .get_matches();

    let config = Loader::new()
        .with_optional_file(OVERRIDE_FILE)
        .build()
        .unwrap_or_else(|e| {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        });

    if let Err(e) = gramgen::generate_keyword_artifacts(
        &config.input.grammar,
        &config.output.keyword_list,
        &config.output.reserved_set,
        &config.keywords,
    ) {
        eprintln!("Generation error: {}", e);
        std::process::exit(1);
    }
}

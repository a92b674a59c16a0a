//! End-to-end tests for the two generation passes
//!
//! Each test runs against a fresh temporary directory: write a grammar,
//! run a pass, assert the artifact bytes. Consumers of these files are
//! bit-order-sensitive, so assertions are byte-exact.

use gramgen::{generate_keyword_artifacts, generate_parser_artifacts, GenError, KeywordCategories};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn small_categories() -> KeywordCategories {
    KeywordCategories {
        data_types: vec!["int".to_string()],
        constants: vec!["nullptr".to_string()],
        tags: vec!["inline".to_string()],
    }
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn with_grammar(text: &str) -> Self {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("lang.grammar"), text).expect("grammar fixture");
        Workspace { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn grammar(&self) -> PathBuf {
        self.path("lang.grammar")
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("artifact to exist")
    }
}

fn run_keyword_pass(ws: &Workspace, categories: &KeywordCategories) {
    generate_keyword_artifacts(
        &ws.grammar(),
        &ws.path("keywords.txt"),
        &ws.path("reserved.def"),
        categories,
    )
    .expect("keyword pass to succeed");
}

fn run_parser_pass(ws: &Workspace) {
    generate_parser_artifacts(
        &ws.grammar(),
        &ws.path("parserlist.def"),
        &ws.path("parsermembers.def"),
    )
    .expect("parser pass to succeed");
}

#[test]
fn mixed_grammar_scenario() {
    // Second "foo" contributes nothing new to the keywords; the one rule
    // line yields one registry entry.
    let ws = Workspace::with_grammar("\"foo\" \"bar\"\nexpr\n\"foo\"\n");
    run_keyword_pass(&ws, &small_categories());
    run_parser_pass(&ws);

    assert_eq!(ws.read("keywords.txt"), "foo|bar|int|nullptr|inline\n\n");
    assert_eq!(
        ws.read("reserved.def"),
        "inline constexpr static auto RESERVED = {\"foo\", \"bar\", \"int\", \"nullptr\", \"inline\"};"
    );
    assert_eq!(ws.read("parserlist.def"), "#define parsers expr\n");
    assert_eq!(
        ws.read("parsermembers.def"),
        "#define parser(p) mpc_parser_t* p{mpc_new(#p)}\nparser(expr);\n#undef parser"
    );
}

#[test]
fn empty_grammar_scenario() {
    let ws = Workspace::with_grammar("");
    run_keyword_pass(&ws, &small_categories());
    run_parser_pass(&ws);

    assert_eq!(ws.read("keywords.txt"), "int|nullptr|inline\n\n");
    assert_eq!(ws.read("parserlist.def"), "#define parsers \n");
    assert_eq!(
        ws.read("parsermembers.def"),
        "#define parser(p) mpc_parser_t* p{mpc_new(#p)}\n\n#undef parser"
    );
}

#[test]
fn reruns_are_byte_identical() {
    let ws = Workspace::with_grammar("expr ::= \"if\" cond \"then\" expr\nterm ::= factor\n");
    run_keyword_pass(&ws, &small_categories());
    run_parser_pass(&ws);
    let first: Vec<String> = ["keywords.txt", "reserved.def", "parserlist.def", "parsermembers.def"]
        .iter()
        .map(|name| ws.read(name))
        .collect();

    run_keyword_pass(&ws, &small_categories());
    run_parser_pass(&ws);
    let second: Vec<String> = ["keywords.txt", "reserved.def", "parserlist.def", "parsermembers.def"]
        .iter()
        .map(|name| ws.read(name))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn passes_share_a_grammar_but_write_disjoint_files() {
    let ws = Workspace::with_grammar("stmt ::= \"return\" expr\nexpr ::= term\n");
    // Order of invocation is not part of the contract.
    run_parser_pass(&ws);
    run_keyword_pass(&ws, &small_categories());

    assert_eq!(ws.read("keywords.txt"), "return|int|nullptr|inline\n\n");
    assert_eq!(ws.read("parserlist.def"), "#define parsers stmt, expr\n");
}

#[test]
fn unreadable_grammar_aborts_without_artifacts() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent.grammar");
    let keyword_list = dir.path().join("keywords.txt");
    let reserved_set = dir.path().join("reserved.def");

    let err = generate_keyword_artifacts(
        &missing,
        &keyword_list,
        &reserved_set,
        &small_categories(),
    )
    .expect_err("missing grammar must abort the run");

    assert!(matches!(err, GenError::ReadInput { ref path, .. } if path == &missing));
    assert!(!keyword_list.exists());
    assert!(!reserved_set.exists());
}

#[test]
fn unwritable_destination_aborts() {
    let ws = Workspace::with_grammar("expr ::= term\n");
    let bad_dir = ws.path("no-such-dir");

    let err = generate_parser_artifacts(
        &ws.grammar(),
        &bad_dir.join("parserlist.def"),
        &bad_dir.join("parsermembers.def"),
    )
    .expect_err("write into a missing directory must abort");

    assert!(matches!(err, GenError::WriteArtifact { .. }));
}

//! Build-time artifact generator for the compiler front-end.
//!
//! Reads the declarative grammar description once per build and derives the
//! machine-consumable tables the lexer and parser are compiled against: the
//! keyword enumeration, the reserved-word declaration, and the parser rule
//! registry. Output is byte-stable and order-preserving; running a pass twice
//! on an unchanged grammar produces identical files.
//!
//! The pipeline is strictly linear and single-pass:
//! grammar text → scan → {aggregate keywords, collect rules} → emit.
//!
//! Grammar content is never validated here. A grammar with no quoted literals
//! or no rule lines simply yields short artifacts; only unreadable input or
//! an unwritable destination aborts a run.

pub mod emit;
pub mod error;
pub mod keywords;
pub mod pipeline;
pub mod rules;
pub mod scan;

pub use error::{GenError, GenResult};
pub use keywords::KeywordCategories;
pub use pipeline::{generate_keyword_artifacts, generate_parser_artifacts};

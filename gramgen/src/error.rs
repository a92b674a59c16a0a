//! Error types for generator runs
//!
//! Both variants are fatal: a run performs no retry, no fallback path and no
//! partial-artifact cleanup. Grammar content is never an error source here.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that abort a generator run.
#[derive(Debug)]
pub enum GenError {
    /// The grammar file is missing or inaccessible
    ReadInput { path: PathBuf, source: io::Error },
    /// The filesystem rejected an artifact write
    WriteArtifact { path: PathBuf, source: io::Error },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::ReadInput { path, source } => {
                write!(f, "cannot read grammar file {}: {}", path.display(), source)
            }
            GenError::WriteArtifact { path, source } => {
                write!(f, "cannot write artifact {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::ReadInput { source, .. } | GenError::WriteArtifact { source, .. } => {
                Some(source)
            }
        }
    }
}

/// Type alias for generator results
pub type GenResult<T> = Result<T, GenError>;

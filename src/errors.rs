//! Failure modes of a golden comparison.
//!
//! Every variant is surfaced to the calling test as-is: there is no local
//! recovery and no retry. I/O errors are forwarded untouched so the caller sees
//! the same kind and message the file system reported.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T, E = GoldenError> = std::result::Result<T, E>;

/// Coarse classification of a [`GoldenError`], handy for assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingBaseline,
    Mismatch,
    InvalidName,
    Io,
}

#[derive(Debug, Error, Diagnostic)]
pub enum GoldenError {
    #[error("golden file {} does not exist", path.display())]
    #[diagnostic(
        code(goldmaster::missing_baseline),
        help("run once with GOLDEN_UPDATE=1 to record it")
    )]
    MissingBaseline { path: PathBuf },

    #[error(
        "golden file mismatch for {}\n\nexpected (golden):\n{expected}\n\nactual (run):\n{actual}\n\ndiff:\n{diff}",
        path.display()
    )]
    #[diagnostic(
        code(goldmaster::mismatch),
        help("if the new output is correct, rerun with GOLDEN_UPDATE=1 to accept it")
    )]
    Mismatch {
        path: PathBuf,
        /// Escaped baseline content.
        expected: String,
        /// Escaped output of the run.
        actual: String,
        /// Unified diff from `expected` to `actual`.
        diff: String,
    },

    #[error("invalid test name {name:?}: {reason}")]
    #[diagnostic(code(goldmaster::invalid_name))]
    InvalidName { name: String, reason: &'static str },

    #[error(transparent)]
    #[diagnostic(code(goldmaster::io))]
    Io(#[from] std::io::Error),
}

impl GoldenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GoldenError::MissingBaseline { .. } => ErrorKind::MissingBaseline,
            GoldenError::Mismatch { .. } => ErrorKind::Mismatch,
            GoldenError::InvalidName { .. } => ErrorKind::InvalidName,
            GoldenError::Io(_) => ErrorKind::Io,
        }
    }

    /// The baseline path this error refers to, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            GoldenError::MissingBaseline { path } | GoldenError::Mismatch { path, .. } => {
                Some(path.as_path())
            }
            GoldenError::InvalidName { .. } | GoldenError::Io(_) => None,
        }
    }
}

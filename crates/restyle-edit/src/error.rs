//! Error types for rewrite operations.

use restyle_io::IoError;
use thiserror::Error;

/// Error types for rewrite operations.
///
/// Missing files and write failures are hard errors that abort the run.
/// A rule that matches nothing is deliberately NOT represented here; it is
/// reported through [`crate::RuleOutcome`] instead.
#[derive(Error, Debug)]
pub enum EditError {
    /// File I/O error (reading the target file).
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// Invalid regular expression in a pattern rule.
    #[error("Pattern error: {0}")]
    Pattern(String),

    /// Writing the rewritten content back failed.
    #[error("Write error: {0}")]
    Write(String),
}

//! Error types for RSPt file decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Errors arising while decoding RSPt output files.
#[derive(Debug, Error)]
pub enum RsptError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A partial set of optional inputs was supplied where all or none are
    /// required together.
    #[error("wrong input parameters: {0}")]
    WrongInputParameters(String),

    /// The off-diagonal mask marker phrase is absent from the out-file.
    #[error("mask in out-file `{}` is absent", path.display())]
    MaskNotFound {
        /// The out-file that was searched.
        path: PathBuf,
    },

    /// A reconstruction whose upstream implementation is incomplete.
    #[error("implementation not complete: {0}")]
    NotImplemented(&'static str),

    /// A table or mask block that does not conform to the expected layout.
    #[error("malformed data in `{}` at line {line}: {message}", path.display())]
    TableFormat {
        /// The file containing the offending data.
        path: PathBuf,
        /// The one-based line number of the offending line.
        line: usize,
        /// A description of the problem.
        message: String,
    },

    /// A well-formed table whose shape is inconsistent with the requested
    /// orbital structure.
    #[error("shape mismatch in `{}`: {message}", path.display())]
    ShapeMismatch {
        /// The file whose shape is inconsistent.
        path: PathBuf,
        /// A description of the inconsistency.
        message: String,
    },
}

/// A convenience `Result` type alias using the crate's [`RsptError`] type.
pub type Result<T> = std::result::Result<T, RsptError>;

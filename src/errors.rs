//! Error types for lexicon loading.
//!
//! Sink and labeler failures are plain [`std::io::Error`]s; everything the
//! lexicon loader can report lives here.

use thiserror::Error;

/// Errors that can occur while loading a subjectivity lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon file could not be opened or read.
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A clue line lacks one of `type`, `word1`, `pos1`, `priorpolarity`.
    #[error("line {line}: missing required field `{field}`")]
    MissingField { line: usize, field: &'static str },

    /// A simple-format line is not `word;label`.
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
}

/// Result type for lexicon operations.
pub type LexiconResult<T> = Result<T, LexiconError>;

//! Error types for reading reviews, loading configuration and running the
//! extraction.

use proscons_nlp::LexiconError;
use thiserror::Error;

/// Errors that can occur while reading review XML.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// The review file could not be opened.
    #[error("failed to open reviews {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not well-formed XML.
    #[error("malformed review XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Character data is not valid UTF-8.
    #[error("review text is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// Result type for review reading.
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Errors that can occur while loading a TOML configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors that end an extraction run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Reviews(#[from] ReviewError),

    /// The output file could not be created.
    #[error("failed to create output {path}: {source}")]
    CreateOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a labeled sentence failed.
    #[error("failed to write labeled sentence: {0}")]
    Write(#[source] std::io::Error),
}

//! Review input and the `proscons-extract` driver for [`proscons_nlp`].
//!
//! [`ReviewReader`] streams [`Review`](proscons_nlp::Review)s out of review
//! XML; [`run`] wires a lexicon, the reader and an output file together
//! according to a [`PipelineConfig`].

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod reader;
pub mod run;

pub use config::{ExtractConfig, LexiconConfig, PipelineConfig, DEFAULT_LEXICON_PATH};
pub use errors::{ConfigError, ReviewError, ReviewResult, RunError};
pub use reader::ReviewReader;
pub use run::{label_reviews, run, RunSummary};

#[cfg(test)]
mod tests;

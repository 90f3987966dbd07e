//! Distant-supervision sentence labeling from review pros and cons.
//!
//! Review authors list short "pro" and "con" phrases next to the free-text
//! body. A body sentence that mentions an aspect named in a pro (con) is
//! assumed to be positive (negative). This crate turns those phrases into a
//! per-review lookup table and scans the body with a 1–3 token window.
//!
//! ## Modules
//!
//! - [`tokenize`] - Sentence splitting and word tokenization
//! - [`lexicon`] - Subjectivity lexicon loading into polarity dictionaries
//! - [`keyphrase`] - Reduction of pro/con phrases into a keyphrase map
//! - [`labeler`] - The sliding-window sentence labeler
//! - [`sink`] - Output sinks for labeled sentences
//! - [`display`] - Debug rendering of window matches
//! - [`errors`] - Error types
//!
//! ## Example
//!
//! ```
//! use proscons_nlp::{
//!     ExtractOptions, LabeledSentence, Polarity, SentenceLabeler, SentimentLexicon,
//! };
//!
//! let lexicon = SentimentLexicon::from_words(&["good"], &[]);
//! let labeler = SentenceLabeler::new(&lexicon, ExtractOptions::default());
//!
//! let mut out: Vec<LabeledSentence> = Vec::new();
//! labeler
//!     .extract(&["good battery"], &[] as &[&str], "The battery was great.", &mut out)
//!     .unwrap();
//!
//! assert_eq!(out.len(), 1);
//! assert_eq!(out[0].polarity, Polarity::Positive);
//! assert_eq!(out[0].text(), "The battery was great .");
//! ```

pub mod display;
pub mod errors;
pub mod keyphrase;
pub mod labeler;
pub mod lexicon;
pub mod sink;
pub mod tokenize;

mod polarity;
mod review;

pub use display::SentenceDisplay;
pub use errors::{LexiconError, LexiconResult};
pub use keyphrase::{KeyphraseMap, KeyphraseReducer, Reduction, MAX_KEYPHRASE_TOKENS};
pub use labeler::{
    ExtractOptions, ExtractStats, LabeledSentence, SentenceLabeler, SentenceMatch, WindowMatch,
    MAX_OUTPUT_TOKENS,
};
pub use lexicon::{
    LexiconFormat, LexiconOptions, PartOfSpeech, PolarityDictionary, SentimentLexicon,
};
pub use polarity::Polarity;
pub use review::Review;
pub use sink::{FileSink, LabelSink, WriterSink};
pub use tokenize::Tokenizer;

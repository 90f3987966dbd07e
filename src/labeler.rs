//! The sliding-window sentence labeler.
//!
//! For every review a fresh [`KeyphraseMap`] is built from the pros and
//! cons. The body is split into sentences and each sentence is scanned left
//! to right. At every token the unigram, the bigram ending there and the
//! trigram ending there are looked up, in that order. The first hit labels
//! the whole sentence and ends the scan, so a sentence is labeled at most
//! once.

use crate::keyphrase::{KeyphraseMap, KeyphraseReducer};
use crate::sink::LabelSink;
use crate::{Polarity, Review, SentimentLexicon, Tokenizer};
use std::fmt;
use std::io;
use tracing::{debug, trace};

/// Labeled sentences are cut to this many tokens.
pub const MAX_OUTPUT_TOKENS: usize = 100;

/// A sentence (or long pro/con phrase) with its inherited polarity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledSentence {
    pub polarity: Polarity,
    /// At most [`MAX_OUTPUT_TOKENS`] tokens.
    pub tokens: Vec<String>,
}

impl LabeledSentence {
    /// Keeps only the first [`MAX_OUTPUT_TOKENS`] tokens.
    pub fn new<S: Into<String>>(polarity: Polarity, tokens: impl IntoIterator<Item = S>) -> Self {
        Self {
            polarity,
            tokens: tokens
                .into_iter()
                .take(MAX_OUTPUT_TOKENS)
                .map(Into::into)
                .collect(),
        }
    }

    /// Tokens joined with single spaces.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// The output line, without the trailing newline: `<label>:\t<text>`.
impl fmt::Display for LabeledSentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t{}", self.polarity.label(), self.text())
    }
}

/// Where a sentence matched the keyphrase map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowMatch {
    /// Token index of the first token of the window.
    pub start: usize,
    /// Token index of the last token of the window (inclusive).
    pub end: usize,
    pub key: String,
    pub polarity: Polarity,
}

/// A matched sentence with its full (untruncated) tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceMatch<'t> {
    pub tokens: Vec<&'t str>,
    pub window: WindowMatch,
}

/// Which categories of labeled output reach the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Write body sentences matched through the keyphrase map.
    pub extract_sentences: bool,
    /// Write pro/con phrases too long to become keyphrases.
    pub extract_keyphrases: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            extract_sentences: true,
            extract_keyphrases: true,
        }
    }
}

/// Counts for a single review.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// Entries in the review's keyphrase map.
    pub keyphrases: usize,
    /// Body sentences that matched, written or not.
    pub sentences_matched: usize,
    /// Records actually written to the sink.
    pub written: usize,
}

pub struct SentenceLabeler<'a> {
    lexicon: &'a SentimentLexicon,
    tokenizer: Tokenizer,
    options: ExtractOptions,
}

impl<'a> SentenceLabeler<'a> {
    pub fn new(lexicon: &'a SentimentLexicon, options: ExtractOptions) -> Self {
        Self {
            lexicon,
            tokenizer: Tokenizer::new(),
            options,
        }
    }

    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Reduce pros (positive) and then cons (negative) into a new map.
    ///
    /// The second value holds the phrases too long to reduce, pros first.
    pub fn build_keyphrase_map<P: AsRef<str>, C: AsRef<str>>(
        &self,
        pros: &[P],
        cons: &[C],
    ) -> (KeyphraseMap, Vec<LabeledSentence>) {
        let reducer = KeyphraseReducer::new(self.lexicon, &self.tokenizer);
        let mut map = KeyphraseMap::new();
        let mut direct = reducer.reduce(pros, Polarity::Positive, &mut map);
        direct.extend(reducer.reduce(cons, Polarity::Negative, &mut map));
        (map, direct)
    }

    /// First window of `tokens` found in `map`.
    ///
    /// Positions are visited left to right; at each position the unigram is
    /// tried before the bigram and the trigram ending there.
    pub fn match_sentence(map: &KeyphraseMap, tokens: &[&str]) -> Option<WindowMatch> {
        for (idx, &token) in tokens.iter().enumerate() {
            let mut candidates = vec![(idx, token.to_string())];
            if idx >= 1 {
                candidates.push((idx - 1, format!("{} {}", tokens[idx - 1], token)));
            }
            if idx >= 2 {
                candidates.push((
                    idx - 2,
                    format!("{} {} {}", tokens[idx - 2], tokens[idx - 1], token),
                ));
            }

            for (start, key) in candidates {
                if let Some(polarity) = map.get(&key) {
                    return Some(WindowMatch {
                        start,
                        end: idx,
                        key,
                        polarity,
                    });
                }
            }
        }
        None
    }

    /// Every sentence of `body` that matches `map`, in order.
    pub fn matches<'t>(&self, map: &KeyphraseMap, body: &'t str) -> Vec<SentenceMatch<'t>> {
        if map.is_empty() {
            return Vec::new();
        }

        self.tokenizer
            .sentences(body)
            .into_iter()
            .filter_map(|sentence| {
                let tokens = self.tokenizer.words(sentence);
                let window = Self::match_sentence(map, &tokens)?;
                trace!(key = %window.key, polarity = %window.polarity, sentence, "sentence matched");
                Some(SentenceMatch { tokens, window })
            })
            .collect()
    }

    /// Label the sentences of one review and write them to `sink`.
    ///
    /// Long pro/con phrases are written first (when keyphrase extraction is
    /// on), then matched body sentences (when sentence extraction is on).
    /// A review without usable keyphrases produces no body output.
    pub fn extract<P, C, S>(
        &self,
        pros: &[P],
        cons: &[C],
        body: &str,
        sink: &mut S,
    ) -> io::Result<ExtractStats>
    where
        P: AsRef<str>,
        C: AsRef<str>,
        S: LabelSink + ?Sized,
    {
        let (map, direct) = self.build_keyphrase_map(pros, cons);
        let mut stats = ExtractStats {
            keyphrases: map.len(),
            ..ExtractStats::default()
        };

        if self.options.extract_keyphrases {
            for sentence in &direct {
                sink.write(sentence)?;
                stats.written += 1;
            }
        }

        if map.is_empty() {
            debug!(direct = direct.len(), "no keyphrases for review");
            return Ok(stats);
        }

        for matched in self.matches(&map, body) {
            stats.sentences_matched += 1;
            if self.options.extract_sentences {
                sink.write(&LabeledSentence::new(matched.window.polarity, matched.tokens))?;
                stats.written += 1;
            }
        }

        debug!(
            keyphrases = stats.keyphrases,
            matched = stats.sentences_matched,
            written = stats.written,
            "review labeled"
        );
        Ok(stats)
    }

    pub fn extract_review<S: LabelSink + ?Sized>(
        &self,
        review: &Review,
        sink: &mut S,
    ) -> io::Result<ExtractStats> {
        self.extract(review.pros.as_slice(), review.cons.as_slice(), &review.text, sink)
    }
}

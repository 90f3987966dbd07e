//! Reduction of pro/con phrases into a per-review keyphrase map.
//!
//! Short phrases (up to [`MAX_KEYPHRASE_TOKENS`] tokens) become lookup keys
//! once every sentiment word is stripped from them: in "good battery" the
//! aspect is "battery", and "good" would only produce spurious matches.
//! Longer phrases are too specific to reappear in the body and are emitted
//! as labeled sentences on their own.

use crate::labeler::LabeledSentence;
use crate::{Polarity, SentimentLexicon, Tokenizer};
use std::collections::HashMap;

/// Phrases with more tokens than this are emitted directly.
pub const MAX_KEYPHRASE_TOKENS: usize = 3;

/// Reduced phrase text → polarity, scoped to a single review.
///
/// Inserting an existing key overwrites its polarity. Cons are reduced after
/// pros, so an aspect listed on both sides ends up negative.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyphraseMap {
    entries: HashMap<String, Polarity>,
}

impl KeyphraseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the polarity previously stored under `key`, if any.
    pub fn insert(&mut self, key: impl Into<String>, polarity: Polarity) -> Option<Polarity> {
        self.entries.insert(key.into(), polarity)
    }

    pub fn get(&self, key: &str) -> Option<Polarity> {
        self.entries.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// What became of a single pro/con phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduction<'p> {
    /// Aspect key with sentiment words removed.
    Key(String),
    /// Longer than [`MAX_KEYPHRASE_TOKENS`]; the phrase's own tokens.
    Direct(Vec<&'p str>),
    /// Nothing left after stripping sentiment words.
    Dropped,
}

/// Turns pro/con phrase lists into [`KeyphraseMap`] entries.
pub struct KeyphraseReducer<'a> {
    lexicon: &'a SentimentLexicon,
    tokenizer: &'a Tokenizer,
}

impl<'a> KeyphraseReducer<'a> {
    pub fn new(lexicon: &'a SentimentLexicon, tokenizer: &'a Tokenizer) -> Self {
        Self { lexicon, tokenizer }
    }

    /// Reduce one phrase without touching any map.
    pub fn reduce_phrase<'p>(&self, phrase: &'p str) -> Reduction<'p> {
        let tokens = self.tokenizer.words(phrase);
        if tokens.len() > MAX_KEYPHRASE_TOKENS {
            return Reduction::Direct(tokens);
        }

        // Either dictionary counts, whatever side the phrase came from.
        let aspect: Vec<&str> = tokens
            .into_iter()
            .filter(|token| !self.lexicon.contains(token))
            .collect();

        let key = aspect.join(" ");
        let key = key.trim();
        if key.is_empty() {
            Reduction::Dropped
        } else {
            Reduction::Key(key.to_string())
        }
    }

    /// Insert the reduced `phrases` under `polarity`, in order.
    ///
    /// Returns the long phrases as labeled sentences; they never enter the map.
    pub fn reduce<P: AsRef<str>>(
        &self,
        phrases: &[P],
        polarity: Polarity,
        map: &mut KeyphraseMap,
    ) -> Vec<LabeledSentence> {
        let mut direct = Vec::new();

        for phrase in phrases {
            match self.reduce_phrase(phrase.as_ref()) {
                Reduction::Key(key) => {
                    if let Some(previous) = map.insert(key.as_str(), polarity) {
                        if previous != polarity {
                            tracing::debug!(%key, %polarity, "keyphrase listed as both pro and con");
                        }
                    }
                }
                Reduction::Direct(tokens) => {
                    direct.push(LabeledSentence::new(polarity, tokens));
                }
                Reduction::Dropped => {
                    tracing::debug!(phrase = phrase.as_ref(), "keyphrase reduced to nothing");
                }
            }
        }

        direct
    }
}

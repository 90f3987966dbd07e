//! Sentence splitting and word tokenization.
//!
//! Both operations use Unicode text segmentation (UAX #29). Sentence
//! splitting adds an abbreviation pass on top: a fragment that ends in a
//! known abbreviation ("Dr.", "Inc.", "e.g.") is joined with the fragment
//! that follows it instead of closing a sentence.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Common abbreviations that should NOT be treated as sentence boundaries.
static COMMON_ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "dr", "mr", "mrs", "ms", "prof", "sr", "jr",
        "inc", "ltd", "corp", "co", "llc",
        "e.g", "i.e", "vs", "etc", "approx",
        "u.s", "u.k", "p.m", "a.m",
        "st", "ave", "blvd", "dept", "fig",
    ]
    .iter()
    .copied()
    .collect()
});

/// The shared sentence splitter and word tokenizer.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    custom_abbreviations: HashSet<String>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add abbreviations (without the trailing period, case-insensitive).
    pub fn with_custom_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        for abbrev in abbreviations {
            self.custom_abbreviations
                .insert(abbrev.trim_end_matches('.').to_lowercase());
        }
        self
    }

    /// Split `text` into trimmed, non-empty sentences in source order.
    pub fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut pending_start: Option<usize> = None;

        for (idx, fragment) in text.split_sentence_bound_indices() {
            let start = *pending_start.get_or_insert(idx);
            if self.ends_with_abbreviation(fragment) {
                continue;
            }
            push_trimmed(&mut sentences, &text[start..idx + fragment.len()]);
            pending_start = None;
        }

        if let Some(start) = pending_start {
            push_trimmed(&mut sentences, &text[start..]);
        }

        sentences
    }

    /// Split `text` into word and punctuation tokens, dropping whitespace.
    pub fn words<'t>(&self, text: &'t str) -> Vec<&'t str> {
        text.split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .collect()
    }

    fn is_abbreviation(&self, word: &str) -> bool {
        let normalized = word.trim_end_matches('.').to_lowercase();
        COMMON_ABBREVIATIONS.contains(normalized.as_str())
            || self.custom_abbreviations.contains(&normalized)
    }

    fn ends_with_abbreviation(&self, fragment: &str) -> bool {
        let trimmed = fragment.trim_end();
        if !trimmed.ends_with('.') {
            return false;
        }
        let last_word = trimmed
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or(trimmed)
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        self.is_abbreviation(last_word)
    }
}

fn push_trimmed<'t>(sentences: &mut Vec<&'t str>, sentence: &'t str) {
    let sentence = sentence.trim();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }
}

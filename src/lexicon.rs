//! Subjectivity lexicon loading.
//!
//! The default format is the clue file of Wilson, Wiebe and Hoffmann (2005),
//! one entry per line:
//!
//! ```text
//! type=strongsubj len=1 word1=abominable pos1=adj stemmed1=n priorpolarity=negative
//! type=weaksubj len=1 word1=youthful pos1=adj stemmed1=n priorpolarity=positive
//! ```
//!
//! The distributed file has a few broken lines (a stray `m` after
//! `stemmed1`, `len` given twice). Unknown fields and tokens without `=` are
//! ignored. A line missing one of the required fields is skipped with a
//! warning; fields are parsed per line and never carried over.
//!
//! A simpler `word;label` format is also accepted.

use crate::errors::{LexiconError, LexiconResult};
use crate::Polarity;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

const STRONG_SUBJECTIVE: &str = "strongsubj";

/// Part of speech of a lexicon entry, normalized to the internal tag set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// `noun` → `N`
    Noun,
    /// `adj` → `ADJ`
    Adjective,
    /// `verb` → `V`
    Verb,
    /// `adverb` → `ADV`
    Adverb,
    /// `anypos` → `*`
    Any,
    /// Any other value, passed through unchanged.
    Other(String),
}

impl PartOfSpeech {
    /// Normalize a `pos1` value from the clue file.
    pub fn from_lexicon(raw: &str) -> Self {
        match raw {
            "noun" => PartOfSpeech::Noun,
            "adj" => PartOfSpeech::Adjective,
            "verb" => PartOfSpeech::Verb,
            "adverb" => PartOfSpeech::Adverb,
            "anypos" => PartOfSpeech::Any,
            other => PartOfSpeech::Other(other.to_string()),
        }
    }

    /// Accepts both internal tags (`ADJ`) and lexicon names (`adj`).
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "N" => PartOfSpeech::Noun,
            "ADJ" => PartOfSpeech::Adjective,
            "V" => PartOfSpeech::Verb,
            "ADV" => PartOfSpeech::Adverb,
            "*" => PartOfSpeech::Any,
            other => PartOfSpeech::from_lexicon(other),
        }
    }

    /// The internal tag (`N`, `ADJ`, `V`, `ADV`, `*`).
    pub fn tag(&self) -> &str {
        match self {
            PartOfSpeech::Noun => "N",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Verb => "V",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Any => "*",
            PartOfSpeech::Other(tag) => tag,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// On-disk layout of the lexicon file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LexiconFormat {
    /// `key=value` clue lines.
    #[default]
    Clues,
    /// `word;label` lines. Every entry gets the `*` tag.
    Simple,
}

impl FromStr for LexiconFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clues" => Ok(LexiconFormat::Clues),
            "simple" => Ok(LexiconFormat::Simple),
            other => Err(format!("unknown lexicon format: {:?}", other)),
        }
    }
}

/// Filters applied while loading.
#[derive(Debug, Clone, Default)]
pub struct LexiconOptions {
    pub format: LexiconFormat,
    /// Keep only `type=strongsubj` entries. Ignored by the simple format.
    pub strong_only: bool,
    /// Drop entries whose normalized part of speech is listed here.
    pub exclude_pos: HashSet<PartOfSpeech>,
}

/// Words of one polarity with the parts of speech seen for each.
#[derive(Debug, Clone, Default)]
pub struct PolarityDictionary {
    entries: HashMap<String, Vec<PartOfSpeech>>,
}

impl PolarityDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the `polarity` side of a lexicon from file contents.
    pub fn parse(content: &str, polarity: Polarity, options: &LexiconOptions) -> Self {
        let mut dictionary = Self::new();
        for entry in parse_entries(content, options) {
            if entry.polarity == polarity {
                dictionary.insert(entry.word, entry.pos);
            }
        }
        dictionary
    }

    /// Record `pos` for `word`. A word may collect several tags.
    pub fn insert(&mut self, word: impl Into<String>, pos: PartOfSpeech) {
        self.entries.entry(word.into()).or_default().push(pos);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Tags in the order their lines appeared in the file.
    pub fn pos_tags(&self, word: &str) -> Option<&[PartOfSpeech]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The positive and negative dictionaries, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    positive: PolarityDictionary,
    negative: PolarityDictionary,
}

impl SentimentLexicon {
    pub fn new(positive: PolarityDictionary, negative: PolarityDictionary) -> Self {
        Self { positive, negative }
    }

    /// Read `path` once and build both dictionaries from it.
    pub fn load(path: &Path, options: &LexiconOptions) -> LexiconResult<Self> {
        let content = read_lexicon(path)?;
        Ok(Self::parse(&content, options))
    }

    /// Each line is parsed once and filed under its polarity.
    pub fn parse(content: &str, options: &LexiconOptions) -> Self {
        let mut lexicon = Self::new(PolarityDictionary::new(), PolarityDictionary::new());
        for entry in parse_entries(content, options) {
            lexicon.dictionary_mut(entry.polarity).insert(entry.word, entry.pos);
        }

        debug!(
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            "loaded polarity dictionaries"
        );
        lexicon
    }

    /// A lexicon from plain word lists, every word tagged `*`.
    pub fn from_words(positive: &[&str], negative: &[&str]) -> Self {
        let mut lexicon = Self::new(PolarityDictionary::new(), PolarityDictionary::new());
        for word in positive {
            lexicon.positive.insert(*word, PartOfSpeech::Any);
        }
        for word in negative {
            lexicon.negative.insert(*word, PartOfSpeech::Any);
        }
        lexicon
    }

    /// True if either dictionary has `word`.
    pub fn contains(&self, word: &str) -> bool {
        self.positive.contains(word) || self.negative.contains(word)
    }

    pub fn positive(&self) -> &PolarityDictionary {
        &self.positive
    }

    pub fn negative(&self) -> &PolarityDictionary {
        &self.negative
    }

    pub fn dictionary(&self, polarity: Polarity) -> &PolarityDictionary {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
        }
    }

    fn dictionary_mut(&mut self, polarity: Polarity) -> &mut PolarityDictionary {
        match polarity {
            Polarity::Positive => &mut self.positive,
            Polarity::Negative => &mut self.negative,
        }
    }
}

fn read_lexicon(path: &Path) -> LexiconResult<String> {
    fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// One parsed lexicon line.
#[derive(Debug, PartialEq)]
struct LexiconEntry<'a> {
    subjectivity: Option<&'a str>,
    word: &'a str,
    pos: PartOfSpeech,
    polarity: &'a str,
}

/// A line that passed every load filter.
struct AcceptedEntry<'a> {
    word: &'a str,
    pos: PartOfSpeech,
    polarity: Polarity,
}

/// Parse `content` line by line, skipping (and logging) broken lines and
/// dropping entries the options filter out.
fn parse_entries<'c>(content: &'c str, options: &LexiconOptions) -> Vec<AcceptedEntry<'c>> {
    let mut accepted = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_num = idx + 1;

        let parsed = match options.format {
            LexiconFormat::Clues => parse_clue_line(line, line_num),
            LexiconFormat::Simple => parse_simple_line(line, line_num),
        };
        let entry = match parsed {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, line, "skipping lexicon line");
                continue;
            }
        };

        // `neutral`, `both` and anything else belong to neither side.
        let Some(polarity) = entry_polarity(options.format, entry.polarity) else {
            continue;
        };
        if options.strong_only
            && options.format == LexiconFormat::Clues
            && entry.subjectivity != Some(STRONG_SUBJECTIVE)
        {
            continue;
        }
        if options.exclude_pos.contains(&entry.pos) {
            continue;
        }

        accepted.push(AcceptedEntry {
            word: entry.word,
            pos: entry.pos,
            polarity,
        });
    }

    accepted
}

/// Clue files only know `positive` and `negative`; the simple format also
/// takes the output labels `1` and `-1`.
fn entry_polarity(format: LexiconFormat, raw: &str) -> Option<Polarity> {
    match format {
        LexiconFormat::Clues => [Polarity::Positive, Polarity::Negative]
            .into_iter()
            .find(|polarity| polarity.lexicon_name() == raw),
        LexiconFormat::Simple => Polarity::from_label(raw),
    }
}

fn parse_clue_line(line: &str, line_num: usize) -> LexiconResult<LexiconEntry<'_>> {
    let mut subjectivity = None;
    let mut word = None;
    let mut pos = None;
    let mut polarity = None;

    for part in line.split_whitespace() {
        let Some((key, value)) = part.split_once('=') else {
            continue;
        };
        match key {
            "type" => subjectivity = Some(value),
            "word1" => word = Some(value),
            "pos1" => pos = Some(PartOfSpeech::from_lexicon(value)),
            "priorpolarity" => polarity = Some(value),
            _ => {}
        }
    }

    let missing = |field| LexiconError::MissingField {
        line: line_num,
        field,
    };
    Ok(LexiconEntry {
        subjectivity: Some(subjectivity.ok_or_else(|| missing("type"))?),
        word: word.ok_or_else(|| missing("word1"))?,
        pos: pos.ok_or_else(|| missing("pos1"))?,
        polarity: polarity.ok_or_else(|| missing("priorpolarity"))?,
    })
}

fn parse_simple_line(line: &str, line_num: usize) -> LexiconResult<LexiconEntry<'_>> {
    let (word, label) = line.split_once(';').ok_or_else(|| LexiconError::Malformed {
        line: line_num,
        message: "expected `word;label`".to_string(),
    })?;
    Ok(LexiconEntry {
        subjectivity: None,
        word,
        pos: PartOfSpeech::Any,
        polarity: label.trim(),
    })
}

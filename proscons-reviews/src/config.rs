//! Pipeline configuration.
//!
//! ```toml
//! [lexicon]
//! path = "subjclueslen1-HLTEMNLP05.tff"
//! format = "clues"
//! strong_only = false
//! exclude_pos = ["V"]
//!
//! [extract]
//! sentences = true
//! keyphrases = true
//! ```
//!
//! Every field is optional.

use crate::errors::ConfigError;
use proscons_nlp::{ExtractOptions, LexiconFormat, LexiconOptions, PartOfSpeech};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the MPQA subjectivity clue list.
pub const DEFAULT_LEXICON_PATH: &str = "subjclueslen1-HLTEMNLP05.tff";

/// Configuration for one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub lexicon: LexiconConfig,
    pub extract: ExtractConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub path: PathBuf,
    pub format: LexiconFormat,
    pub strong_only: bool,
    /// Part-of-speech tags (`N`, `ADJ`, `V`, `ADV`, `*`) or lexicon names.
    pub exclude_pos: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LEXICON_PATH),
            format: LexiconFormat::default(),
            strong_only: false,
            exclude_pos: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    pub sentences: bool,
    pub keyphrases: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            sentences: true,
            keyphrases: true,
        }
    }
}

impl PipelineConfig {
    /// Load from a TOML file. Unlike a missing lexicon, a missing config
    /// file is reported rather than defaulted.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn lexicon_options(&self) -> LexiconOptions {
        LexiconOptions {
            format: self.lexicon.format,
            strong_only: self.lexicon.strong_only,
            exclude_pos: self
                .lexicon
                .exclude_pos
                .iter()
                .map(|tag| PartOfSpeech::from_tag(tag))
                .collect(),
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            extract_sentences: self.extract.sentences,
            extract_keyphrases: self.extract.keyphrases,
        }
    }
}

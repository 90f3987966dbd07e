//! Command-line arguments for `proscons-extract`.

use crate::config::PipelineConfig;
use crate::errors::ConfigError;
use clap::Parser;
use proscons_nlp::LexiconFormat;
use std::path::PathBuf;

/// Label review sentences with the polarity of the pros and cons they mention.
#[derive(Debug, Parser)]
#[command(name = "proscons-extract", version, about)]
pub struct Cli {
    /// Review XML file.
    pub input: PathBuf,

    /// Output file, created or truncated.
    pub output: PathBuf,

    /// Write matched body sentences (yes/true/t/1).
    #[arg(value_parser = parse_flag)]
    pub extract_sentences: Option<bool>,

    /// Write pros and cons too long to be keyphrases (yes/true/t/1).
    #[arg(value_parser = parse_flag)]
    pub extract_keyphrases: Option<bool>,

    /// Subjectivity lexicon.
    #[arg(long, env = "PROSCONS_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Lexicon file format: clues or simple.
    #[arg(long, value_name = "FORMAT")]
    pub lexicon_format: Option<LexiconFormat>,

    /// Only load strongly subjective clues.
    #[arg(long)]
    pub strong_only: bool,

    /// Skip lexicon entries with this part of speech.
    #[arg(long, value_name = "TAG")]
    pub exclude_pos: Vec<String>,

    /// TOML configuration file.
    #[arg(long, env = "PROSCONS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print each matched sentence with its window to stderr.
    #[arg(long)]
    pub explain: bool,
}

/// `yes`, `true`, `t` and `1` in any case are true; anything else is false.
pub fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(matches!(
        value.to_ascii_lowercase().as_str(),
        "yes" | "true" | "t" | "1"
    ))
}

impl Cli {
    /// The configuration file (or defaults) with command-line values applied.
    pub fn resolve(&self) -> Result<PipelineConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };

        if let Some(path) = &self.lexicon {
            config.lexicon.path = path.clone();
        }
        if let Some(format) = self.lexicon_format {
            config.lexicon.format = format;
        }
        if self.strong_only {
            config.lexicon.strong_only = true;
        }
        config
            .lexicon
            .exclude_pos
            .extend(self.exclude_pos.iter().cloned());
        if let Some(sentences) = self.extract_sentences {
            config.extract.sentences = sentences;
        }
        if let Some(keyphrases) = self.extract_keyphrases {
            config.extract.keyphrases = keyphrases;
        }

        Ok(config)
    }
}

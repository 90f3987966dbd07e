//! Debug rendering of window matches.
//!
//! ```text
//! Great  battery  life  here  .
//!        ╰─────╯Positive("battery")
//! ```

use crate::WindowMatch;
use std::fmt::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Internal representation of an included match for display.
struct IncludedMatch {
    start: usize,
    end: usize,
    description: String,
}

/// Renders a tokenized sentence with its matched windows underlined.
pub struct SentenceDisplay<'a> {
    tokens: &'a [&'a str],
    include_matches: Vec<IncludedMatch>,
}

impl<'a> SentenceDisplay<'a> {
    pub fn new(tokens: &'a [&'a str]) -> Self {
        SentenceDisplay {
            tokens,
            include_matches: Vec::new(),
        }
    }

    /// Windows that point past the last token are ignored.
    pub fn include(&mut self, window: &WindowMatch) {
        if window.start > window.end || window.end >= self.tokens.len() {
            return;
        }
        self.include_matches.push(IncludedMatch {
            start: window.start,
            end: window.end,
            description: format!("{:?}({:?})", window.polarity, window.key),
        });
    }

    /// Takes self
    pub fn with(mut self, window: &WindowMatch) -> Self {
        self.include(window);
        self
    }
}

impl<'a> fmt::Display for SentenceDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::with_capacity(self.tokens.len());
        let mut token_idx_to_end_display_char_idx = Vec::with_capacity(self.tokens.len());

        let mut opening_line = String::new();
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(token);
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        //        ╰─────╯Positive("battery")
        for included in self.include_matches.iter() {
            f.write_char('\n')?;

            let start_char_idx = token_idx_to_start_display_char_idx[included.start];
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let end_char_idx = token_idx_to_end_display_char_idx[included.end];
            let char_len = end_char_idx - start_char_idx;
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&included.description)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{KeyphraseMap, Polarity, SentenceLabeler};

    #[test]
    fn test_unigram_display_snapshot() {
        let tokens = ["Great", "battery", "life", "here", "."];
        let mut map = KeyphraseMap::new();
        map.insert("battery", Polarity::Positive);
        map.insert("battery life", Polarity::Negative);

        let window = SentenceLabeler::match_sentence(&map, &tokens).unwrap();
        let display = SentenceDisplay::new(&tokens).with(&window);
        insta::assert_snapshot!(display.to_string(), @r###"
        Great  battery  life  here  .
               ╰─────╯Positive("battery")
        "###);
    }

    #[test]
    fn test_bigram_display_snapshot() {
        let tokens = ["a", "long", "battery", "life"];
        let mut map = KeyphraseMap::new();
        map.insert("battery life", Polarity::Negative);

        let window = SentenceLabeler::match_sentence(&map, &tokens).unwrap();
        let display = SentenceDisplay::new(&tokens).with(&window);
        insta::assert_snapshot!(display.to_string(), @r###"
        a  long  battery  life
                 ╰───────────╯Negative("battery life")
        "###);
    }

    #[test]
    fn test_out_of_range_window_is_ignored() {
        let tokens = ["lens"];
        let window = WindowMatch {
            start: 0,
            end: 3,
            key: "lens cap".into(),
            polarity: Polarity::Negative,
        };
        let display = SentenceDisplay::new(&tokens).with(&window);
        assert_eq!(display.to_string(), "lens");
    }
}

use std::fmt;
use std::str::FromStr;

/// Sentiment orientation of a pro/con phrase and of the sentences it labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Pros. Written as `1`.
    Positive,
    /// Cons. Written as `-1`.
    Negative,
}

impl Polarity {
    /// The label written to the output file.
    pub fn label(self) -> &'static str {
        match self {
            Polarity::Positive => "1",
            Polarity::Negative => "-1",
        }
    }

    /// The `priorpolarity` value used by the subjectivity lexicon.
    pub fn lexicon_name(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }

    /// Parse either an output label (`1`, `-1`) or a lexicon name.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "1" | "positive" => Some(Polarity::Positive),
            "-1" | "negative" => Some(Polarity::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Polarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polarity::from_label(s).ok_or_else(|| format!("unknown polarity label: {:?}", s))
    }
}

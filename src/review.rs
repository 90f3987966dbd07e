/// One review as handed over by a review source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Review {
    /// Source identifier; informational only.
    pub id: Option<String>,
    /// Pro phrases in document order.
    pub pros: Vec<String>,
    /// Con phrases in document order.
    pub cons: Vec<String>,
    /// Free-text body.
    pub text: String,
}

impl Review {
    /// True when neither pros nor cons were given.
    pub fn has_no_keyphrases(&self) -> bool {
        self.pros.is_empty() && self.cons.is_empty()
    }
}

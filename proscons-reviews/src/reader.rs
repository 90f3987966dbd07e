//! Streaming reader for review XML.
//!
//! ```xml
//! <review>
//!   <id>20</id>
//!   <procons>
//!     <pro>carl zeiss lens</pro>
//!     <con>minolta would have attracted more photographers</con>
//!   </procons>
//!   <text>The carl zeiss lens is sharp.</text>
//! </review>
//! ```
//!
//! Elements other than `review`, `id`, `pro`, `con` and `text` are ignored,
//! as is any wrapper around the reviews.

use crate::errors::{ReviewError, ReviewResult};
use proscons_nlp::Review;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Id,
    Pro,
    Con,
    Text,
}

impl Field {
    fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            b"id" => Some(Field::Id),
            b"pro" => Some(Field::Pro),
            b"con" => Some(Field::Con),
            b"text" => Some(Field::Text),
            _ => None,
        }
    }
}

/// Per-review accumulation state.
#[derive(Debug, Default)]
struct ReviewState {
    review: Review,
    field: Option<Field>,
    id: String,
    phrase: String,
}

impl ReviewState {
    fn open(&mut self, field: Field) {
        self.field = Some(field);
        if matches!(field, Field::Pro | Field::Con) {
            self.phrase.clear();
        }
    }

    fn close(&mut self, field: Field) {
        match field {
            Field::Pro => self.review.pros.push(std::mem::take(&mut self.phrase)),
            Field::Con => self.review.cons.push(std::mem::take(&mut self.phrase)),
            Field::Id => {
                let id = std::mem::take(&mut self.id);
                self.review.id = Some(id.trim().to_string());
            }
            Field::Text => {}
        }
        self.field = None;
    }

    /// Whitespace-only chunks are formatting between elements.
    fn append(&mut self, chunk: &str) {
        if chunk.trim().is_empty() {
            return;
        }
        match self.field {
            Some(Field::Pro | Field::Con) => self.phrase.push_str(chunk),
            Some(Field::Text) => self.review.text.push_str(chunk),
            Some(Field::Id) => self.id.push_str(chunk),
            None => {}
        }
    }

    fn finish(&mut self) -> Review {
        std::mem::take(self).review
    }
}

/// Iterator over the reviews of an XML document.
///
/// The first error ends iteration.
pub struct ReviewReader<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    state: ReviewState,
    reviews_read: usize,
    done: bool,
}

impl ReviewReader<BufReader<File>> {
    pub fn open(path: &Path) -> ReviewResult<Self> {
        let file = File::open(path).map_err(|source| ReviewError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<'s> ReviewReader<&'s [u8]> {
    pub fn from_xml(xml: &'s str) -> Self {
        Self::new(xml.as_bytes())
    }
}

impl<R: BufRead> ReviewReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: Reader::from_reader(source),
            buf: Vec::new(),
            state: ReviewState::default(),
            reviews_read: 0,
            done: false,
        }
    }

    /// Number of complete reviews yielded so far.
    pub fn reviews_read(&self) -> usize {
        self.reviews_read
    }

    fn next_review(&mut self) -> ReviewResult<Option<Review>> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(start) => {
                    let name = start.name();
                    if name.as_ref() == b"review" {
                        self.state = ReviewState::default();
                    } else if let Some(field) = Field::from_name(name.as_ref()) {
                        self.state.open(field);
                    }
                }
                Event::End(end) => {
                    let name = end.name();
                    if name.as_ref() == b"review" {
                        self.reviews_read += 1;
                        let review = self.state.finish();
                        trace!(id = ?review.id, pros = review.pros.len(), cons = review.cons.len(), "review read");
                        return Ok(Some(review));
                    } else if let Some(field) = Field::from_name(name.as_ref()) {
                        self.state.close(field);
                    }
                }
                // `<pro/>` behaves like `<pro></pro>`.
                Event::Empty(empty) => {
                    let name = empty.name();
                    if name.as_ref() == b"review" {
                        self.reviews_read += 1;
                        self.state = ReviewState::default();
                        return Ok(Some(Review::default()));
                    } else if let Some(field) = Field::from_name(name.as_ref()) {
                        self.state.open(field);
                        self.state.close(field);
                    }
                }
                Event::Text(text) => {
                    let text = text.unescape()?;
                    self.state.append(&text);
                }
                Event::CData(cdata) => {
                    let raw = cdata.into_inner();
                    let text = std::str::from_utf8(&raw)?;
                    self.state.append(text);
                }
                Event::Eof => return Ok(None),
                _ => {}
            }
        }
    }
}

impl<R: BufRead> Iterator for ReviewReader<R> {
    type Item = ReviewResult<Review>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_review() {
            Ok(Some(review)) => Some(Ok(review)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

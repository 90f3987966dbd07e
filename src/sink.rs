//! Output sinks for labeled sentences.
//!
//! The file format is one record per line, `<label>:\t<tokens>\n`, UTF-8.

use crate::LabeledSentence;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::warn;

/// Append-only destination for labeled sentences.
pub trait LabelSink {
    fn write(&mut self, sentence: &LabeledSentence) -> io::Result<()>;
}

/// Collects records in memory.
impl LabelSink for Vec<LabeledSentence> {
    fn write(&mut self, sentence: &LabeledSentence) -> io::Result<()> {
        self.push(sentence.clone());
        Ok(())
    }
}

/// Writes records as text lines to any [`Write`].
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    written: usize,
}

/// The sink used for output files.
pub type FileSink = WriterSink<BufWriter<File>>;

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Number of records written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Flush and close the underlying writer.
    ///
    /// A failing flush is logged and otherwise ignored. Returns the number of
    /// records written.
    pub fn finish(mut self) -> usize {
        if let Err(err) = self.writer.flush() {
            warn!(error = %err, "failed to flush labeled sentences on close");
        }
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<BufWriter<File>> {
    /// Create (or truncate) `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path).map_err(|err| {
            io::Error::new(
                err.kind(),
                format!("failed to create {}: {}", path.display(), err),
            )
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> LabelSink for WriterSink<W> {
    fn write(&mut self, sentence: &LabeledSentence) -> io::Result<()> {
        writeln!(self.writer, "{}", sentence)?;
        self.written += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Polarity;
    use std::fs;

    #[test]
    fn test_line_format() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write(&LabeledSentence::new(Polarity::Positive, ["The", "battery", "lasts", "."]))
            .unwrap();
        sink.write(&LabeledSentence::new(Polarity::Negative, ["Menus", "are", "slow"]))
            .unwrap();

        assert_eq!(sink.written(), 2);
        let bytes = sink.into_inner();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "1:\tThe battery lasts .\n-1:\tMenus are slow\n"
        );
    }

    #[test]
    fn test_non_ascii_is_utf8() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write(&LabeledSentence::new(Polarity::Positive, ["Schütze", "approves"]))
            .unwrap();
        assert_eq!(sink.into_inner(), "1:\tSchütze approves\n".as_bytes());
    }

    #[test]
    fn test_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labeled.txt");

        let mut sink = FileSink::create(&path).unwrap();
        sink.write(&LabeledSentence::new(Polarity::Negative, ["too", "heavy"]))
            .unwrap();
        assert_eq!(sink.finish(), 1);

        assert_eq!(fs::read_to_string(&path).unwrap(), "-1:\ttoo heavy\n");
    }

    #[test]
    fn test_file_sink_unwritable_path() {
        let err = FileSink::create(Path::new("/nonexistent/dir/out.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir/out.txt"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
    }

    #[test]
    fn test_write_failure_propagates_and_close_is_best_effort() {
        let mut sink = WriterSink::new(FailingWriter);
        let err = sink
            .write(&LabeledSentence::new(Polarity::Positive, ["lens"]))
            .unwrap_err();
        assert_eq!(err.to_string(), "disk full");
        assert_eq!(sink.finish(), 0);
    }
}

//! The corpus file resource.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;

/// Resource errors for the corpus file.
///
/// These are always fatal to a run; only individual malformed lines are
/// recoverable, and those are [`ParseError`](crate::corpus::parser::ParseError)s.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// No file at the given path.
    #[error("no corpus file found at {0}")]
    NotFound(PathBuf),

    /// `open` was called while the corpus was already open.
    #[error("corpus is already open")]
    AlreadyOpen,

    /// `next_line` or `close` was called without an open corpus.
    #[error("corpus is not open")]
    NotOpen,
}

/// A raw, not yet parsed corpus line together with its position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawLine {
    /// The line text, without the trailing newline.
    pub text: String,
    /// Zero-based index of the line in the corpus.
    pub index: usize,
}

impl std::fmt::Display for RawLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A part-of-speech-tagged corpus file sorted by frequency, with the most
/// frequent word at line 0.
///
/// The corpus is an explicitly owned resource: callers `open` it once,
/// stream lines with `next_line`, and `close` it. Opening twice, or reading
/// or closing without an open handle, is an error. Dropping the value
/// releases the file handle regardless, so every exit path (including error
/// propagation out of a streaming loop) releases the resource.
///
/// # Examples
///
/// ```no_run
/// use wordforge::corpus::Corpus;
///
/// # fn main() -> wordforge::error::Result<()> {
/// let mut corpus = Corpus::at("corpus.tsv")?;
/// corpus.open()?;
/// while let Some(line) = corpus.next_line()? {
///     println!("{}: {}", line.index, line.text);
/// }
/// corpus.close()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Corpus {
    path: PathBuf,
    reader: Option<BufReader<File>>,
    next_index: usize,
}

impl Corpus {
    /// Create a corpus handle for `path`.
    ///
    /// Fails with [`CorpusError::NotFound`] if the file does not exist; the
    /// file is not opened until [`open`](Self::open) is called.
    pub fn at<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.is_file() {
            return Err(CorpusError::NotFound(path).into());
        }
        Ok(Corpus {
            path,
            reader: None,
            next_index: 0,
        })
    }

    /// The path this corpus reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the corpus for sequential reading.
    pub fn open(&mut self) -> Result<()> {
        if self.reader.is_some() {
            return Err(CorpusError::AlreadyOpen.into());
        }
        let file = File::open(&self.path)?;
        self.reader = Some(BufReader::new(file));
        self.next_index = 0;
        Ok(())
    }

    /// Read the next line, or `None` at end of file.
    pub fn next_line(&mut self) -> Result<Option<RawLine>> {
        let reader = self.reader.as_mut().ok_or(CorpusError::NotOpen)?;
        let mut text = String::new();
        let bytes = reader.read_line(&mut text)?;
        if bytes == 0 {
            return Ok(None);
        }
        while text.ends_with('\n') || text.ends_with('\r') {
            text.pop();
        }
        let index = self.next_index;
        self.next_index += 1;
        Ok(Some(RawLine { text, index }))
    }

    /// Close the corpus, releasing the file handle.
    pub fn close(&mut self) -> Result<()> {
        if self.reader.take().is_none() {
            return Err(CorpusError::NotOpen.into());
        }
        Ok(())
    }

    /// Whether the corpus is currently open.
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }
}

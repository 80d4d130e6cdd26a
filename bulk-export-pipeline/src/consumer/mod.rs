//! Consumer module for the bulk export pipeline.
//!
//! Reads a source file forward-only, handing out one line at a time so that
//! input of any size is processed without being held in memory.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::errors::{PipelineError, RecordError};

/// A single line read from the source, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number.
    pub number: usize,
    /// Line content with trailing `\n` / `\r\n` removed.
    pub text: String,
}

/// Lazy iterator over the lines of a source.
pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    number: usize,
}

impl LineReader<BufReader<File>> {
    /// Open the file at `path` for reading.
    pub fn open(path: &Path) -> Result<Self, PipelineError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Wrap an already buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            number: 0,
        }
    }

    fn read_next(&mut self) -> Result<Option<SourceLine>, PipelineError> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.number += 1;

        while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
            self.buf.pop();
        }

        let text = std::str::from_utf8(&self.buf)
            .map_err(|_| PipelineError::record(self.number, RecordError::Decode))?
            .to_owned();

        Ok(Some(SourceLine {
            number: self.number,
            text,
        }))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<SourceLine, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}

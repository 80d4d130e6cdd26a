//! Processor module for the bulk export pipeline.
//!
//! Selects a line parser from the source file's name and turns each line
//! into a [`Triple`].

mod parsers;

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use bulk_export_shared::Triple;

use crate::consumer::LineReader;
use crate::errors::{PipelineError, RecordError};

pub use parsers::{parse_pair_counts, parse_token_counts, parse_uri_counts};

/// Parses one line (terminator already removed) into a triple.
pub type LineParser = fn(&str) -> Result<Triple, RecordError>;

/// The kinds of count files produced by the extraction jobs.
///
/// The kind is the exact base name of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `wikiUrl<TAB>{(token,freq),...}`
    TokenCounts,
    /// `surfaceForm<TAB>wikiUrl<TAB>freq`
    PairCounts,
    /// `wikiUrl<TAB>freq`
    UriCounts,
    /// Surface form totals, which are not indexed.
    SfAndTotalCounts,
}

impl RecordKind {
    /// All known kinds.
    pub const ALL: [RecordKind; 4] = [
        Self::TokenCounts,
        Self::PairCounts,
        Self::UriCounts,
        Self::SfAndTotalCounts,
    ];

    /// The file name this kind is read from.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TokenCounts => "tokenCounts",
            Self::PairCounts => "pairCounts",
            Self::UriCounts => "uriCounts",
            Self::SfAndTotalCounts => "sfAndTotalCounts",
        }
    }

    /// Determine the kind from the base name of `path`.
    pub fn from_path(path: &Path) -> Result<Self, PipelineError> {
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| PipelineError::InvalidPath(path.to_path_buf()))?;
        name.parse()
    }

    /// The line parser for this kind.
    ///
    /// `SfAndTotalCounts` has none and always fails.
    pub fn parser(&self) -> Result<LineParser, PipelineError> {
        let parser: LineParser = match self {
            Self::TokenCounts => parse_token_counts,
            Self::PairCounts => parse_pair_counts,
            Self::UriCounts => parse_uri_counts,
            Self::SfAndTotalCounts => return Err(PipelineError::NotImplemented(*self)),
        };
        Ok(parser)
    }
}

impl FromStr for RecordKind {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PipelineError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lazy sequence of triples parsed from a line source.
pub struct RecordStream<R> {
    lines: LineReader<R>,
    parser: LineParser,
}

impl<R: BufRead> RecordStream<R> {
    /// Parse the lines of `lines` with `parser`.
    pub fn new(lines: LineReader<R>, parser: LineParser) -> Self {
        Self { lines, parser }
    }
}

impl<R: BufRead> Iterator for RecordStream<R> {
    type Item = Result<Triple, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        Some((self.parser)(&line.text).map_err(|e| PipelineError::record(line.number, e)))
    }
}

/// Open `path` and return the lazy triple sequence for its kind.
///
/// The kind is resolved before the file is opened, so unknown and
/// unimplemented kinds fail without touching the file system.
pub fn parse_file(path: &Path) -> Result<RecordStream<BufReader<File>>, PipelineError> {
    let parser = RecordKind::from_path(path)?.parser()?;
    let lines = LineReader::open(path)?;
    Ok(RecordStream::new(lines, parser))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulk_export_shared::FieldName;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn test_kind_from_name() {
        for kind in RecordKind::ALL {
            assert_eq!(kind.as_str().parse::<RecordKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_name_must_match_exactly() {
        assert!(matches!(
            "tokencounts".parse::<RecordKind>(),
            Err(PipelineError::UnknownKind(name)) if name == "tokencounts"
        ));
        assert!(matches!(
            "uriCounts.tsv".parse::<RecordKind>(),
            Err(PipelineError::UnknownKind(_))
        ));
    }

    #[test]
    fn test_kind_from_path_uses_base_name() {
        let path = PathBuf::from("/data/pig/output/pairCounts");
        assert_eq!(RecordKind::from_path(&path).unwrap(), RecordKind::PairCounts);
    }

    #[test]
    fn test_kind_from_path_without_file_name() {
        let path = PathBuf::from("/");
        assert!(matches!(
            RecordKind::from_path(&path),
            Err(PipelineError::InvalidPath(_))
        ));
    }

    #[test]
    fn test_sf_and_total_counts_has_no_parser() {
        assert!(matches!(
            RecordKind::SfAndTotalCounts.parser(),
            Err(PipelineError::NotImplemented(RecordKind::SfAndTotalCounts))
        ));
    }

    #[test]
    fn test_record_stream_reports_line_numbers() {
        let input = "http://x/wiki/A\t1\nhttp://x/wiki/B\tmany\n";
        let lines = LineReader::new(Cursor::new(input.as_bytes().to_vec()));
        let mut stream = RecordStream::new(lines, parse_uri_counts);

        let first = stream.next().unwrap().unwrap();
        assert_eq!(first.identifier, "A");
        assert_eq!(first.field, FieldName::UriCount);

        assert!(matches!(
            stream.next(),
            Some(Err(PipelineError::Record {
                line: 2,
                source: RecordError::InvalidFrequency(_)
            }))
        ));
        assert!(stream.next().is_none());
    }
}

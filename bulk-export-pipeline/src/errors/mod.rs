//! Error types for the bulk export pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::processor::RecordKind;

/// Errors that can occur while exporting a source file.
///
/// None of these are recovered from; the run stops at the first one.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The source file's base name is not one of the known record kinds.
    #[error("Unknown record kind: {0}")]
    UnknownKind(String),

    /// The record kind exists but is deliberately not exported.
    #[error("Record kind {0} is not implemented (not indexed)")]
    NotImplemented(RecordKind),

    /// The source path has no usable file name.
    #[error("Invalid source path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// A line of the source file could not be parsed.
    #[error("Malformed record at line {line}: {source}")]
    Record {
        /// 1-based line number in the source file.
        line: usize,
        #[source]
        source: RecordError,
    },

    /// Invalid writer configuration.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Reading the source or writing a chunk failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PipelineError {
    /// Create a record error for the given line.
    pub fn record(line: usize, source: RecordError) -> Self {
        Self::Record { line, source }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Reasons a single source line is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The line has the wrong number of tab-separated fields.
    #[error("expected {expected} tab-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// Token count data is not wrapped in `{(` and `)}`.
    #[error("token counts not wrapped in '{{(' and ')}}': {0}")]
    MissingWrapper(String),

    /// A token count pair has no comma separating token and frequency.
    #[error("token count pair without frequency: {0}")]
    MissingFrequency(String),

    /// A frequency is not an unsigned integer.
    #[error("invalid frequency: {0:?}")]
    InvalidFrequency(String),

    /// The URL has no `/wiki/` marker to take the identifier from.
    #[error("no '/wiki/' in URL: {0}")]
    MissingWikiMarker(String),

    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8")]
    Decode,
}

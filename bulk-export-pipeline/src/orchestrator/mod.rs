//! Orchestrator module for the bulk export pipeline.
//!
//! Coordinates the consumer, processor, and loader components for one
//! source file.

use std::path::Path;

use tracing::{info, instrument};

use crate::errors::PipelineError;
use crate::loader::{ChunkedBulkWriter, FileChunkTarget, WriteSummary, WriterConfig};
use crate::processor::parse_file;

/// Orchestrator that runs a single export from source file to chunks.
///
/// Chunks are written next to the source file, named after it.
pub struct Orchestrator {
    config: WriterConfig,
}

impl Orchestrator {
    /// Create a new orchestrator with the default writer configuration.
    pub fn new() -> Self {
        Self {
            config: WriterConfig::default(),
        }
    }

    /// Create a new orchestrator with custom writer configuration.
    pub fn with_config(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Export `source` as bulk requests against `index_name`.
    ///
    /// The record kind is resolved first: unknown or unimplemented kinds
    /// fail before any chunk is created.
    #[instrument(skip(self, source), fields(source = %source.display()))]
    pub fn run(&self, index_name: &str, source: &Path) -> Result<WriteSummary, PipelineError> {
        let records = parse_file(source)?;

        info!(index = %index_name, "Starting bulk export");

        let target = FileChunkTarget::new(source);
        let mut writer = ChunkedBulkWriter::with_config(target, index_name, self.config.clone())?;
        let summary = writer.write(records)?;

        info!(
            records = summary.records,
            chunks = summary.chunks,
            "Bulk export completed"
        );

        Ok(summary)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

//! # Bulk Export Pipeline
//!
//! This crate turns the line-oriented count files of the extraction jobs
//! into newline-delimited bulk index requests, split into numbered chunk
//! files.
//!
//! ## Architecture
//!
//! The pipeline follows the Consumer-Processor-Loader pattern:
//!
//! 1. **Consumer**: Reads the source file lazily, one line at a time
//! 2. **Processor**: Parses each line into a [`Triple`] according to its [`RecordKind`]
//! 3. **Loader**: Encodes triples as bulk action pairs and rotates chunk files
//! 4. **Orchestrator**: Coordinates the pipeline flow
//!
//! [`Triple`]: bulk_export_shared::Triple

pub mod consumer;
pub mod errors;
pub mod loader;
pub mod orchestrator;
pub mod processor;

pub use errors::{PipelineError, RecordError};
pub use loader::{write, ChunkedBulkWriter, WriteSummary, WriterConfig};
pub use orchestrator::Orchestrator;
pub use processor::{parse_file, RecordKind, RecordStream};

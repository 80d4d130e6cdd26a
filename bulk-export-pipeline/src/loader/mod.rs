//! Loader module for the bulk export pipeline.
//!
//! Writes triples as bulk action pairs into numbered chunk files.

mod bulk_action;
mod target;

use std::io::Write;
use std::path::Path;

use tracing::{debug, instrument};

use crate::errors::PipelineError;
use bulk_export_shared::{Triple, BULK_SIZE, TYPE_NAME};

pub use bulk_action::BulkAction;
pub use target::{chunk_path, ChunkTarget, FileChunkTarget};

/// Configuration for the chunked bulk writer.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Number of bulk action pairs per chunk.
    pub bulk_size: usize,
    /// Document type stamped on every action.
    pub type_name: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            bulk_size: BULK_SIZE,
            type_name: TYPE_NAME.to_string(),
        }
    }
}

impl WriterConfig {
    /// Create a config with a custom chunk size.
    pub fn with_bulk_size(bulk_size: usize) -> Self {
        Self {
            bulk_size,
            ..Self::default()
        }
    }
}

/// Outcome of a completed write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    /// Bulk action pairs written.
    pub records: usize,
    /// Chunks created, including an empty first chunk for empty input.
    pub chunks: usize,
}

/// Writer that spreads bulk action pairs over fixed-size chunks.
///
/// The first chunk is opened up front, so even empty input yields one
/// (empty) chunk. A new chunk is only opened when a record arrives for it,
/// which keeps the chunk count at `ceil(records / bulk_size)`.
pub struct ChunkedBulkWriter<T> {
    target: T,
    index_name: String,
    config: WriterConfig,
}

impl<T: ChunkTarget> ChunkedBulkWriter<T> {
    /// Create a writer with the default configuration.
    pub fn new(target: T, index_name: impl Into<String>) -> Self {
        Self {
            target,
            index_name: index_name.into(),
            config: WriterConfig::default(),
        }
    }

    /// Create a writer with a custom configuration.
    pub fn with_config(
        target: T,
        index_name: impl Into<String>,
        config: WriterConfig,
    ) -> Result<Self, PipelineError> {
        if config.bulk_size == 0 {
            return Err(PipelineError::config("bulk_size must be greater than zero"));
        }

        Ok(Self {
            target,
            index_name: index_name.into(),
            config,
        })
    }

    /// Consume the writer, returning its target.
    pub fn into_target(self) -> T {
        self.target
    }

    /// Write every triple, in order, rotating chunks every `bulk_size` records.
    ///
    /// Stops at the first error from the sequence or the target. The chunk
    /// open at that point is left partially written.
    #[instrument(skip(self, triples), fields(index = %self.index_name))]
    pub fn write<I>(&mut self, triples: I) -> Result<WriteSummary, PipelineError>
    where
        I: IntoIterator<Item = Result<Triple, PipelineError>>,
    {
        let mut sequence = 1;
        let mut records = 0;
        let mut chunk = self.target.open_chunk(sequence)?;

        for triple in triples {
            let triple = triple?;

            if records > 0 && records % self.config.bulk_size == 0 {
                self.target.close_chunk(chunk)?;
                sequence += 1;
                chunk = self.target.open_chunk(sequence)?;
                debug!(sequence = sequence, records = records, "Rotated to next chunk");
            }

            let action = BulkAction::new(&self.index_name, &self.config.type_name, &triple);
            write!(chunk, "{}", action)?;
            records += 1;
        }

        self.target.close_chunk(chunk)?;

        Ok(WriteSummary {
            records,
            chunks: sequence,
        })
    }
}

/// Write `triples` for `index_name` into `<output_base>_NNNN.json` files.
pub fn write<I>(index_name: &str, triples: I, output_base: &Path) -> Result<WriteSummary, PipelineError>
where
    I: IntoIterator<Item = Result<Triple, PipelineError>>,
{
    ChunkedBulkWriter::new(FileChunkTarget::new(output_base), index_name).write(triples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RecordError;
    use bulk_export_shared::{FieldName, FieldValue};
    use std::io;

    /// Mock target keeping closed chunks in memory.
    #[derive(Default)]
    struct MemoryTarget {
        open: Option<usize>,
        closed: Vec<String>,
    }

    impl ChunkTarget for MemoryTarget {
        type Chunk = Vec<u8>;

        fn open_chunk(&mut self, sequence: usize) -> io::Result<Self::Chunk> {
            assert!(self.open.is_none(), "chunk {:?} still open", self.open);
            assert_eq!(sequence, self.closed.len() + 1);
            self.open = Some(sequence);
            Ok(Vec::new())
        }

        fn close_chunk(&mut self, chunk: Self::Chunk) -> io::Result<()> {
            self.open = None;
            self.closed.push(String::from_utf8(chunk).unwrap());
            Ok(())
        }
    }

    fn triples(count: usize) -> Vec<Result<Triple, PipelineError>> {
        (0..count)
            .map(|i| {
                Ok(Triple::new(
                    format!("Entity_{i}"),
                    FieldName::UriCount,
                    FieldValue::raw_number(&i.to_string()).unwrap(),
                ))
            })
            .collect()
    }

    fn write_with_bulk_size(count: usize, bulk_size: usize) -> (WriteSummary, Vec<String>) {
        let mut writer = ChunkedBulkWriter::with_config(
            MemoryTarget::default(),
            "idx",
            WriterConfig::with_bulk_size(bulk_size),
        )
        .unwrap();
        let summary = writer.write(triples(count)).unwrap();
        let target = writer.into_target();
        assert!(target.open.is_none());
        (summary, target.closed)
    }

    fn pair_count(chunk: &str) -> usize {
        chunk.lines().count() / 2
    }

    #[test]
    fn test_default_config() {
        let config = WriterConfig::default();
        assert_eq!(config.bulk_size, 5000);
        assert_eq!(config.type_name, "entities");
    }

    #[test]
    fn test_zero_bulk_size_is_rejected() {
        let result =
            ChunkedBulkWriter::with_config(MemoryTarget::default(), "idx", WriterConfig::with_bulk_size(0));
        assert!(matches!(result, Err(PipelineError::InvalidConfig(_))));
    }

    #[test]
    fn test_empty_input_creates_one_empty_chunk() {
        let (summary, chunks) = write_with_bulk_size(0, 3);

        assert_eq!(summary, WriteSummary { records: 0, chunks: 1 });
        assert_eq!(chunks, vec![String::new()]);
    }

    #[test]
    fn test_partial_last_chunk() {
        let (summary, chunks) = write_with_bulk_size(7, 3);

        assert_eq!(summary, WriteSummary { records: 7, chunks: 3 });
        let sizes: Vec<usize> = chunks.iter().map(|c| pair_count(c)).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_chunk() {
        let (summary, chunks) = write_with_bulk_size(6, 3);

        assert_eq!(summary.chunks, 2);
        let sizes: Vec<usize> = chunks.iter().map(|c| pair_count(c)).collect();
        assert_eq!(sizes, vec![3, 3]);
    }

    #[test]
    fn test_order_is_preserved_across_chunks() {
        let (_, chunks) = write_with_bulk_size(5, 2);

        let expected: String = triples(5)
            .iter()
            .map(|t| BulkAction::new("idx", "entities", t.as_ref().unwrap()).to_string())
            .collect();
        assert_eq!(chunks.concat(), expected);
    }

    #[test]
    fn test_error_stops_writing() {
        let mut input = triples(2);
        input.push(Err(PipelineError::record(3, RecordError::Decode)));
        input.extend(triples(2));

        let mut writer = ChunkedBulkWriter::new(MemoryTarget::default(), "idx");
        let result = writer.write(input);

        assert!(matches!(result, Err(PipelineError::Record { line: 3, .. })));
        assert!(writer.into_target().closed.is_empty());
    }
}

//! Destinations for output chunks.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Something that can open and close numbered output chunks.
///
/// Only one chunk is open at a time: the writer always closes the current
/// chunk before asking for the next.
pub trait ChunkTarget {
    /// Handle the bulk actions are written to.
    type Chunk: Write;

    /// Open chunk number `sequence` (1-based).
    fn open_chunk(&mut self, sequence: usize) -> io::Result<Self::Chunk>;

    /// Flush and release a chunk.
    fn close_chunk(&mut self, chunk: Self::Chunk) -> io::Result<()>;
}

/// Path of chunk `sequence` for `base`: `<base>_<NNNN>.json`.
pub fn chunk_path(base: &Path, sequence: usize) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!("_{:04}.json", sequence));
    PathBuf::from(name)
}

/// Writes chunks as files next to a base path.
///
/// Existing files with colliding names are truncated.
#[derive(Debug, Clone)]
pub struct FileChunkTarget {
    base: PathBuf,
}

impl FileChunkTarget {
    /// Create a target writing `<base>_NNNN.json` files.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }
}

impl ChunkTarget for FileChunkTarget {
    type Chunk = BufWriter<File>;

    fn open_chunk(&mut self, sequence: usize) -> io::Result<Self::Chunk> {
        let file = File::create(chunk_path(&self.base, sequence))?;
        Ok(BufWriter::new(file))
    }

    fn close_chunk(&mut self, chunk: Self::Chunk) -> io::Result<()> {
        chunk.into_inner().map_err(|e| e.into_error())?;
        Ok(())
    }
}

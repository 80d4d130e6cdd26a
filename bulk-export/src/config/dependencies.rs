//! Dependency initialization and wiring for the bulk export tool.

use std::path::PathBuf;

use tracing::info;

use crate::ExportError;
use bulk_export_pipeline::{Orchestrator, WriteSummary};

/// Container for everything one export run needs.
pub struct Dependencies {
    /// Target index, used verbatim in every action.
    pub index_name: String,
    /// Source count file; its base name selects the parser.
    pub source: PathBuf,
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Initialize dependencies for exporting `source` into `index_name`.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(ExportError)` - If the index name is empty or the source is not a file
    pub fn new(index_name: impl Into<String>, source: impl Into<PathBuf>) -> Result<Self, ExportError> {
        let index_name = index_name.into();
        let source = source.into();

        if index_name.is_empty() {
            return Err(ExportError::config("index name must not be empty"));
        }

        if !source.is_file() {
            return Err(ExportError::config(format!(
                "source file not found: {}",
                source.display()
            )));
        }

        info!(
            index_name = %index_name,
            source = %source.display(),
            "Initializing dependencies"
        );

        Ok(Self {
            index_name,
            source,
            orchestrator: Orchestrator::new(),
        })
    }

    /// Run the export.
    pub fn run(&self) -> Result<WriteSummary, ExportError> {
        Ok(self.orchestrator.run(&self.index_name, &self.source)?)
    }
}

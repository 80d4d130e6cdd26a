//! # Bulk Export
//!
//! Main library for the bulk export command line tool.
//!
//! This crate wires the pipeline for a single source file and exposes the
//! errors that can stop a run.

pub mod config;

pub use config::Dependencies;

use thiserror::Error;

/// Errors that can occur during export initialization or execution.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Pipeline error.
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] bulk_export_pipeline::PipelineError),
}

impl ExportError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

//! # Bulk Export Shared
//!
//! Shared types and data structures used across the bulk export crates.
//!
//! This crate defines the intermediate unit of the export, the [`Triple`],
//! together with the identifier normalizer that turns wiki-style URLs into
//! document ids.

pub mod identifier;
pub mod triple;

pub use identifier::{uri_ending, WIKI_MARKER};
pub use triple::{FieldName, FieldValue, Triple};

/// Number of bulk action pairs written to a single output chunk.
pub const BULK_SIZE: usize = 5000;

/// Document type stamped on every index action.
pub const TYPE_NAME: &str = "entities";

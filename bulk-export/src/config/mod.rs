//! Configuration and wiring for the bulk export tool.

mod dependencies;

pub use dependencies::Dependencies;

//! Error types for archmap operations.
//!
//! This module provides the main error type [`ArchmapError`] which wraps
//! the error conditions that can occur while validating, exporting, and
//! rendering a diagram.

use std::io;

use thiserror::Error;

/// The main error type for archmap operations.
#[derive(Debug, Error)]
pub enum ArchmapError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ArchmapError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

//! Error types for Folio operations.
//!
//! This module provides the main error type [`FolioError`] which wraps
//! the error conditions that can occur while rendering and exporting pages.

use std::io;

use thiserror::Error;

use folio_core::error::RenderError;

/// The main error type for Folio operations.
///
/// # Diagnostic Variants
///
/// The `Render` variant carries the structured [`RenderError`] so callers can
/// tell an unresolved component from a depth overflow.
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown page `{0}`")]
    UnknownPage(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for FolioError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl From<toml::ser::Error> for FolioError {
    fn from(error: toml::ser::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

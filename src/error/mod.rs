//! # Error Module
//!
//! Error types for the book catalog builder.
//!
//! ## Design Principles
//! - **Skipping is not an error** - unparseable filenames are reported as
//!   skipped entries on the catalog, never through these types
//! - **Include context** - paths and the underlying I/O failure
//! - **Fatal means fatal** - every variant here ends the run

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Scanning error: {0}")]
    Scan(#[from] ScanError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

/// Errors that occur while listing the input directory
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied accessing: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that occur while serializing or writing the catalog files
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Serialized catalog is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, CatalogError>;

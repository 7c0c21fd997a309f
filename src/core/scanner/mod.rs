//! # Scanner Module
//!
//! Lists candidate cover images in a single directory.
//!
//! ## Supported Formats
//! - JPEG (.jpg, .jpeg)
//! - PNG (.png)
//!
//! Extensions are matched case-insensitively. The listing is flat: entries in
//! subdirectories are never visited.
//!
//! ## Example
//! ```rust,ignore
//! use book_catalog::core::scanner::{FileLister, ScanConfig, WalkDirScanner};
//!
//! let scanner = WalkDirScanner::new(ScanConfig::default());
//! let listing = scanner.list(Path::new("library/books"))?;
//! ```

mod filter;
mod walker;

pub use filter::{ImageFilter, IMAGE_EXTENSIONS};
pub use walker::{ScanConfig, WalkDirScanner};

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A directory entry that passed the extension filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedFile {
    /// File name as listed, without any directory component
    pub name: String,
    /// Full path to the file
    pub path: PathBuf,
}

/// Why a directory entry produced no record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Entry is a directory
    Directory,
    /// File name is not valid UTF-8
    NonUtf8Name,
    /// Hidden file while hidden files are excluded
    Hidden,
    /// Extension is not .jpg, .jpeg or .png
    UnsupportedExtension,
    /// Name does not contain the " by " separator
    MissingSeparator,
    /// Entry could not be inspected (e.g. a dangling symlink)
    Unreadable,
}

impl SkipReason {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Directory => "directory",
            Self::NonUtf8Name => "name is not valid UTF-8",
            Self::Hidden => "hidden file",
            Self::UnsupportedExtension => "not a .jpg, .jpeg or .png image",
            Self::MissingSeparator => "no \" by \" in name",
            Self::Unreadable => "entry could not be read",
        }
    }
}

/// A directory entry left out of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Lossy rendering of the entry name
    pub name: String,
    pub reason: SkipReason,
}

/// Result of listing a directory
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Image files in listing order
    pub files: Vec<ListedFile>,
    /// Entries filtered out before parsing
    pub skipped: Vec<SkippedEntry>,
}

/// Trait for directory listers
///
/// Implement this trait to feed the catalog builder from somewhere other
/// than the filesystem (e.g., in tests).
pub trait FileLister {
    /// List the direct children of `dir` that look like cover images
    fn list(&self, dir: &Path) -> Result<ScanResult, ScanError>;
}

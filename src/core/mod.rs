//! # Core Module
//!
//! The catalog engine, independent of any front end.
//!
//! ## Modules
//! - `scanner` - Lists cover images in a directory
//! - `parser` - Splits file names into title and author
//! - `classifier` - Infers the education level from the title
//! - `catalog` - Builds the in-memory record list
//! - `reporter` - Writes books.json / books.csv and run summaries

pub mod catalog;
pub mod classifier;
pub mod parser;
pub mod reporter;
pub mod scanner;

// Re-export commonly used types
pub use catalog::{build_catalog, BookRecord, Catalog, CatalogBuilder};
pub use classifier::EducationLevel;
pub use reporter::{write_catalog, CatalogSummary, ExportOptions};
pub use scanner::{ScanConfig, SkipReason};

//! # Catalog Module
//!
//! Records produced from cover image file names, and the builder that
//! produces them.
//!
//! ## Example
//! ```rust,ignore
//! use book_catalog::core::catalog::CatalogBuilder;
//!
//! let catalog = CatalogBuilder::new().sort_by_name(true).build("library/books".as_ref())?;
//! println!("{} books", catalog.len());
//! ```

mod builder;

pub use builder::{build_catalog, CatalogBuilder};

use crate::core::classifier::{classify, EducationLevel};
use crate::core::parser::ParsedName;
use crate::core::scanner::SkippedEntry;
use std::collections::BTreeMap;

/// Price written for every record; file names carry no pricing data
pub const DEFAULT_PRICE: &str = "0.00";

/// One catalog entry derived from a single cover image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    /// Original file name
    pub image_url: String,
    pub book_title: String,
    pub author: String,
    /// Always `"<title> by <author>"`
    pub description: String,
    pub price: String,
    /// Canonical level label, empty when no keyword matched
    pub education_level: String,
}

impl BookRecord {
    /// Build a record for `image_url` from its parsed name
    pub fn from_parsed(image_url: &str, parsed: ParsedName) -> Self {
        let education_level = classify(&parsed.title)
            .map(|l| l.label().to_string())
            .unwrap_or_default();
        let description = format!("{} by {}", parsed.title, parsed.author);

        Self {
            image_url: image_url.to_string(),
            book_title: parsed.title,
            author: parsed.author,
            description,
            price: DEFAULT_PRICE.to_string(),
            education_level,
        }
    }
}

/// Every record produced in one run, plus what was left out
#[derive(Debug, Default)]
pub struct Catalog {
    /// Records in listing order (or name order when sorting is enabled)
    pub records: Vec<BookRecord>,
    /// Entries that produced no record
    pub skipped: Vec<SkippedEntry>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records per education level; `None` counts unclassified titles
    pub fn level_counts(&self) -> BTreeMap<Option<EducationLevel>, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(classify(&record.book_title)).or_insert(0) += 1;
        }
        counts
    }
}

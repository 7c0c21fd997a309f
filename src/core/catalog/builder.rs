//! Catalog construction: list, filter, parse and classify in one pass.

use super::{BookRecord, Catalog};
use crate::core::parser::parse_filename;
use crate::core::scanner::{
    FileLister, ImageFilter, ScanConfig, SkipReason, SkippedEntry, WalkDirScanner,
};
use crate::error::Result;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Builder for catalog runs
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    config: ScanConfig,
}

impl CatalogBuilder {
    /// Create a builder with the default scan configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow symbolic links when listing
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.config.follow_symlinks = follow;
        self
    }

    /// Sort entries by file name before building records
    pub fn sort_by_name(mut self, sort: bool) -> Self {
        self.config.sort_by_name = sort;
        self
    }

    /// Include hidden files
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.config.include_hidden = include;
        self
    }

    /// Build a catalog from the direct children of `directory`
    pub fn build(&self, directory: &Path) -> Result<Catalog> {
        let scanner = WalkDirScanner::new(self.config.clone());
        self.build_with(&scanner, directory)
    }

    /// Build a catalog using a custom lister
    pub fn build_with(&self, lister: &dyn FileLister, directory: &Path) -> Result<Catalog> {
        let start = Instant::now();
        info!(directory = %directory.display(), "building catalog");

        let listing = lister.list(directory)?;
        let mut catalog = Catalog {
            records: Vec::with_capacity(listing.files.len()),
            skipped: listing.skipped,
        };

        for file in &listing.files {
            push_entry(&mut catalog, &file.name);
        }

        info!(
            records = catalog.records.len(),
            skipped = catalog.skipped.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "catalog built"
        );

        Ok(catalog)
    }

    /// Build a catalog from bare file names, without touching the filesystem.
    ///
    /// Names are filtered by extension (and hidden status) exactly as a
    /// directory listing would be, then kept in the order given unless
    /// sorting is enabled.
    pub fn build_from_names<I, S>(&self, names: I) -> Catalog
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let filter = ImageFilter::new().with_hidden(self.config.include_hidden);
        let mut names: Vec<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        if self.config.sort_by_name {
            names.sort();
        }

        let mut catalog = Catalog::default();
        for name in names {
            let reason = if filter.is_excluded_hidden(&name) {
                Some(SkipReason::Hidden)
            } else if !filter.has_image_extension(&name) {
                Some(SkipReason::UnsupportedExtension)
            } else {
                None
            };

            match reason {
                Some(reason) => catalog.skipped.push(SkippedEntry { name, reason }),
                None => push_entry(&mut catalog, &name),
            }
        }
        catalog
    }
}

/// Parse one image name and append its record, or record the skip
fn push_entry(catalog: &mut Catalog, name: &str) {
    match parse_filename(name) {
        Some(parsed) => {
            let record = BookRecord::from_parsed(name, parsed);
            debug!(
                file = %record.image_url,
                title = %record.book_title,
                level = %record.education_level,
                "cataloged"
            );
            catalog.records.push(record);
        }
        None => {
            debug!(file = %name, "no \" by \" separator, skipping");
            catalog.skipped.push(SkippedEntry {
                name: name.to_string(),
                reason: SkipReason::MissingSeparator,
            });
        }
    }
}

/// Build a catalog from `directory` with the default configuration
pub fn build_catalog(directory: &Path) -> Result<Catalog> {
    CatalogBuilder::new().build(directory)
}

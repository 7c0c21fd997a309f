//! # Reporter Module
//!
//! Serializes the catalog and summarizes what a run produced.
//!
//! - `export` - the `books.json` / `books.csv` writers
//! - [`CatalogSummary`] - counts per education level and per skip reason,
//!   shown by the CLI after a run

mod export;

pub use export::{
    render_csv, render_json, write_catalog, CatalogOutputs, ExportFormat, ExportOptions, COLUMNS,
};

use crate::core::catalog::Catalog;
use crate::core::scanner::SkipReason;
use serde::Serialize;
use std::collections::BTreeMap;

/// Label used for records without an education level
pub const UNCLASSIFIED: &str = "Unclassified";

/// Counts describing one catalog run
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub total_records: usize,
    pub total_skipped: usize,
    /// Records per level label, in classifier rule order, unclassified last
    pub levels: Vec<(String, usize)>,
    pub skipped: BTreeMap<SkipReason, usize>,
}

impl CatalogSummary {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let counts = catalog.level_counts();
        let mut levels: Vec<(String, usize)> = counts
            .iter()
            .filter_map(|(level, n)| level.map(|l| (l.label().to_string(), *n)))
            .collect();
        if let Some(n) = counts.get(&None) {
            levels.push((UNCLASSIFIED.to_string(), *n));
        }

        let mut skipped = BTreeMap::new();
        for entry in &catalog.skipped {
            *skipped.entry(entry.reason).or_insert(0) += 1;
        }

        Self {
            total_records: catalog.len(),
            total_skipped: catalog.skipped.len(),
            levels,
            skipped,
        }
    }
}

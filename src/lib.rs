//! # Book Catalog
//!
//! Builds a book catalog from a folder of cover images.
//!
//! Each image named `"<Title> by <Author>.<ext>"` becomes one record with a
//! title, author, description, placeholder price and an education level
//! inferred from the title. The catalog is written as `books.json` and
//! `books.csv`.
//!
//! ## Architecture
//! - `core` - listing, parsing, classification and export
//! - `error` - error types for fatal failures
//! - `cli` - command-line interface (binary only)

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{CatalogError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point. `RUST_LOG` takes
/// precedence; otherwise `verbose` selects debug output for this crate.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "book_catalog=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    // A subscriber may already be installed (e.g. by an embedding application)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

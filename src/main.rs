//! # book-catalog CLI
//!
//! Command-line interface for the book catalog builder.
//!
//! ## Usage
//! ```bash
//! book-catalog
//! book-catalog library/books --output-dir public --sort --summary
//! ```

mod cli;

use book_catalog::Result;

fn main() -> Result<()> {
    cli::run()
}

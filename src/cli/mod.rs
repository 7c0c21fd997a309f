//! # CLI Module
//!
//! Command-line interface for the book catalog builder.
//!
//! ## Usage
//! ```bash
//! # Catalog the current directory, writing books.json and books.csv here
//! book-catalog
//!
//! # Catalog another folder, writing into an output folder
//! book-catalog library/books --output-dir public
//!
//! # Stable ordering and per-level counts
//! book-catalog --sort --summary
//!
//! # Machine-readable run summary
//! book-catalog --output json
//! ```

use book_catalog::core::reporter::{write_catalog, CatalogSummary, ExportOptions};
use book_catalog::core::{Catalog, CatalogBuilder};
use book_catalog::error::Result;
use clap::{Parser, ValueEnum};
use console::{style, Term};
use std::path::PathBuf;

/// Printed on stdout once both files are written
const COMPLETION_LINE: &str = "books.json and books.csv have been created.";

/// Book Catalog - turn "<Title> by <Author>.jpg" covers into books.json and books.csv
#[derive(Parser, Debug)]
#[command(name = "book-catalog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the cover images
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Directory where books.json and books.csv are written
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Sort records by file name instead of directory listing order
    #[arg(long)]
    sort: bool,

    /// Follow symbolic links when listing the directory
    #[arg(long)]
    follow_symlinks: bool,

    /// Ignore files whose name starts with a dot
    #[arg(long)]
    skip_hidden: bool,

    /// Write the education level into books.json and the books.csv column
    #[arg(long)]
    with_education_level: bool,

    /// Double embedded quotes in books.csv fields
    #[arg(long)]
    escape_quotes: bool,

    /// Print record counts per education level
    #[arg(long)]
    summary: bool,

    /// Output format for the run report
    #[arg(short, long, default_value = "pretty")]
    output: OutputFormat,

    /// Verbose output (lists skipped files, enables debug logging)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON summary for scripting
    Json,
    /// Completion line only
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    book_catalog::init_tracing(cli.verbose);

    let catalog = CatalogBuilder::new()
        .sort_by_name(cli.sort)
        .include_hidden(!cli.skip_hidden)
        .follow_symlinks(cli.follow_symlinks)
        .build(&cli.directory)?;

    let options = ExportOptions {
        include_education_level: cli.with_education_level,
        escape_quotes: cli.escape_quotes,
    };
    write_catalog(&catalog, &cli.output_dir, &options)?;

    match cli.output {
        OutputFormat::Pretty => {
            print_pretty_results(&Term::stdout(), &Term::stderr(), &catalog, &cli)
        }
        OutputFormat::Json => print_json_results(&catalog)?,
        OutputFormat::Minimal => println!("{}", COMPLETION_LINE),
    }

    Ok(())
}

/// Completion line on stdout, run details on stderr
fn print_pretty_results(out: &Term, term: &Term, catalog: &Catalog, cli: &Cli) {
    out.write_line(&format!(
        "{} {}",
        style("✓").green().bold(),
        COMPLETION_LINE
    ))
    .ok();

    term.write_line(&format!(
        "  {} books cataloged, {} entries skipped",
        style(catalog.len()).cyan(),
        style(catalog.skipped.len()).dim()
    ))
    .ok();

    if cli.summary {
        let summary = CatalogSummary::from_catalog(catalog);
        term.write_line("").ok();
        term.write_line(&format!("{}", style("Education levels:").bold().underlined()))
            .ok();
        for (label, count) in &summary.levels {
            term.write_line(&format!("  {:<14} {}", label, style(count).cyan()))
                .ok();
        }
    }

    if cli.verbose && !catalog.skipped.is_empty() {
        term.write_line("").ok();
        term.write_line(&format!("{}", style("Skipped:").bold().underlined()))
            .ok();
        for entry in &catalog.skipped {
            term.write_line(&format!(
                "  {} {} {}",
                style("○").dim(),
                entry.name,
                style(format!("({})", entry.reason.description())).dim()
            ))
            .ok();
        }
    }
}

fn print_json_results(catalog: &Catalog) -> Result<()> {
    let summary = CatalogSummary::from_catalog(catalog);
    let output = serde_json::to_string_pretty(&summary)
        .map_err(book_catalog::error::ExportError::from)?;
    println!("{}", output);
    Ok(())
}

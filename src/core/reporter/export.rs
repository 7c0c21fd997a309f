//! Export functionality for the catalog.
//!
//! Writes the structured (`books.json`) and tabular (`books.csv`) forms.
//!
//! By default both files keep the legacy layout: the JSON objects have no
//! `education_level` key and the CSV `education_level` column is always `""`.
//! CSV fields are wrapped in quotes verbatim, so a title containing `"` or `,`
//! produces a malformed row unless quote escaping is enabled.

use crate::core::catalog::{BookRecord, Catalog};
use crate::error::ExportError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Column names shared by both output forms
pub const COLUMNS: [&str; 6] = [
    "image_url",
    "book_title",
    "author",
    "description",
    "price",
    "education_level",
];

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// File name written in the output directory
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportFormat::Json => "books.json",
            ExportFormat::Csv => "books.csv",
        }
    }
}

/// Output switches; the defaults reproduce the legacy files byte for byte
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportOptions {
    /// Emit the computed level in both files
    pub include_education_level: bool,
    /// Double embedded quotes in CSV fields
    pub escape_quotes: bool,
}

/// Paths of the files written by [`write_catalog`]
#[derive(Debug, Clone)]
pub struct CatalogOutputs {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    image_url: &'a str,
    book_title: &'a str,
    author: &'a str,
    description: &'a str,
    price: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    education_level: Option<&'a str>,
}

/// Render records as a JSON array indented with four spaces
pub fn render_json(records: &[BookRecord], options: &ExportOptions) -> Result<String, ExportError> {
    let rows: Vec<JsonRecord<'_>> = records
        .iter()
        .map(|r| JsonRecord {
            image_url: &r.image_url,
            book_title: &r.book_title,
            author: &r.author,
            description: &r.description,
            price: &r.price,
            education_level: options
                .include_education_level
                .then_some(r.education_level.as_str()),
        })
        .collect();

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    rows.serialize(&mut serializer)?;

    Ok(String::from_utf8(buffer)?)
}

/// Render records as quoted CSV rows joined by `\n`, without a trailing newline
pub fn render_csv(records: &[BookRecord], options: &ExportOptions) -> String {
    let quote = |field: &str| {
        if options.escape_quotes {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            format!("\"{}\"", field)
        }
    };

    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(COLUMNS.iter().map(|c| quote(*c)).collect::<Vec<_>>().join(","));

    for record in records {
        let level = if options.include_education_level {
            record.education_level.as_str()
        } else {
            ""
        };
        let fields = [
            record.image_url.as_str(),
            record.book_title.as_str(),
            record.author.as_str(),
            record.description.as_str(),
            record.price.as_str(),
            level,
        ];
        lines.push(fields.iter().map(|f| quote(*f)).collect::<Vec<_>>().join(","));
    }

    lines.join("\n")
}

/// Write `books.json` then `books.csv` into `output_dir`, replacing any
/// existing files. A failed second write leaves the first file in place.
pub fn write_catalog(
    catalog: &Catalog,
    output_dir: &Path,
    options: &ExportOptions,
) -> Result<CatalogOutputs, ExportError> {
    let json_path = output_dir.join(ExportFormat::Json.file_name());
    let csv_path = output_dir.join(ExportFormat::Csv.file_name());

    let json = render_json(&catalog.records, options)?;
    write_file(&json_path, &json)?;

    let csv = render_csv(&catalog.records, options);
    write_file(&csv_path, &csv)?;

    info!(
        json = %json_path.display(),
        csv = %csv_path.display(),
        records = catalog.len(),
        "catalog written"
    );

    Ok(CatalogOutputs {
        json_path,
        csv_path,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

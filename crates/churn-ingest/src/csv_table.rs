use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use churn_model::PrepError;

/// Raw CSV contents: one header row plus string cells.
///
/// Headers and cells are normalized (trimmed, BOM stripped) but otherwise
/// untyped; type classification happens in [`crate::frame`].
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Position of a header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read the source CSV into a [`CsvTable`].
///
/// Fails on a missing or unreadable file, on a file without a header row,
/// and on ragged records (the reader is not flexible about field counts).
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path)
        .map_err(PrepError::Io)
        .with_context(|| format!("open {}", path.display()))?;
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read header of {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record from {}", path.display()))?;
        rows.push(record.iter().map(normalize_cell).collect());
    }

    Ok(CsvTable { headers, rows })
}

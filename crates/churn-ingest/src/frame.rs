//! DataFrame construction from raw CSV cells.
//!
//! Every column is classified by scanning all of its non-empty cells:
//! integer if each parses as i64, float if each parses as f64, text
//! otherwise. A column with no non-empty cells is text. Empty cells become
//! nulls in the resulting frame.
//!
//! Integer classification matters downstream: recasting an integer column to
//! text yields `415`, not `415.0`, which keeps indicator names readable.

use anyhow::Result;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use churn_model::{PrepError, schema};

use crate::csv_table::CsvTable;
use crate::value::{parse_f64, parse_i64};

/// Type assigned to a source column by content scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

fn classify_cells<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> ColumnKind {
    let mut non_empty = cells.clone().filter(|cell| !cell.is_empty()).peekable();
    if non_empty.peek().is_none() {
        return ColumnKind::Text;
    }
    if non_empty.clone().all(|cell| parse_i64(cell).is_some()) {
        return ColumnKind::Integer;
    }
    if non_empty.all(|cell| parse_f64(cell).is_some()) {
        return ColumnKind::Float;
    }
    ColumnKind::Text
}

fn build_column(name: &str, cells: &[&str], kind: ColumnKind) -> Column {
    match kind {
        ColumnKind::Integer => {
            let values: Vec<Option<i64>> = cells.iter().map(|cell| parse_i64(cell)).collect();
            Series::new(name.into(), values).into_column()
        }
        ColumnKind::Float => {
            let values: Vec<Option<f64>> = cells.iter().map(|cell| parse_f64(cell)).collect();
            Series::new(name.into(), values).into_column()
        }
        ColumnKind::Text => {
            let values: Vec<Option<&str>> = cells
                .iter()
                .map(|cell| if cell.is_empty() { None } else { Some(*cell) })
                .collect();
            Series::new(name.into(), values).into_column()
        }
    }
}

/// Build a typed DataFrame from raw CSV contents.
///
/// Fails on duplicate headers (the frame cannot hold two columns with the
/// same name).
pub fn table_to_frame(table: &CsvTable) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(table.headers.len());
    for (index, name) in table.headers.iter().enumerate() {
        let cells: Vec<&str> = table
            .rows
            .iter()
            .map(|row| row.get(index).map_or("", String::as_str))
            .collect();
        let kind = classify_cells(cells.iter().copied());
        debug!(column = %name, kind = ?kind, "classified column");
        columns.push(build_column(name, &cells, kind));
    }
    Ok(DataFrame::new(columns)?)
}

/// Verify that every column the transformation edits is present.
pub fn ensure_required_columns(frame: &DataFrame) -> Result<()> {
    for name in schema::REQUIRED_COLUMNS {
        if frame.column(name).is_err() {
            return Err(PrepError::MissingColumn(name.to_string()).into());
        }
    }
    Ok(())
}

//! One-hot encoding of text columns.
//!
//! Encoding contract:
//! - indicator columns are named `{column}_{level}`;
//! - numeric columns pass through unchanged and keep their relative order,
//!   ahead of all indicators;
//! - indicator groups follow the source-column order, levels within a group
//!   sorted lexicographically;
//! - a null cell yields 0 in every indicator of its group.

use std::collections::BTreeSet;

use anyhow::Result;
use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};
use tracing::debug;

/// Replace every text column with 0/1 indicator columns, one per distinct
/// level. Numeric columns pass through unchanged.
pub fn one_hot_encode(frame: &DataFrame) -> Result<DataFrame> {
    let mut passthrough: Vec<Column> = Vec::new();
    let mut indicators: Vec<Column> = Vec::new();

    for column in frame.get_columns() {
        if column.dtype() != &DataType::String {
            passthrough.push(column.clone());
            continue;
        }
        let values = column.str()?;
        let levels: BTreeSet<&str> = values.iter().flatten().collect();
        debug!(column = %column.name(), levels = levels.len(), "encoding column");
        for level in levels {
            let name = format!("{}_{}", column.name(), level);
            let cells: Vec<f64> = values
                .iter()
                .map(|cell| if cell == Some(level) { 1.0 } else { 0.0 })
                .collect();
            indicators.push(Series::new(name.into(), cells).into_column());
        }
    }

    passthrough.extend(indicators);
    Ok(DataFrame::new(passthrough)?)
}

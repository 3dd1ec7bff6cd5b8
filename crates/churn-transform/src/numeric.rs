//! Final numeric cast.

use anyhow::Result;
use polars::prelude::{AnyValue, Column, DataFrame, DataType};

use churn_model::PrepError;

/// Cast every column to `Float64`.
///
/// A cast that would lose a value (a non-numeric cell turning into a null)
/// is a value failure and aborts the run.
pub fn cast_all_float(frame: &DataFrame) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(frame.width());
    for column in frame.get_columns() {
        let casted = column.cast(&DataType::Float64)?;
        if casted.null_count() > column.null_count() {
            return Err(PrepError::NonNumeric {
                column: column.name().to_string(),
                value: first_uncastable(column, &casted),
            }
            .into());
        }
        columns.push(casted);
    }
    Ok(DataFrame::new(columns)?)
}

fn first_uncastable(original: &Column, casted: &Column) -> String {
    for index in 0..original.len() {
        let before = original.get(index).unwrap_or(AnyValue::Null);
        let after = casted.get(index).unwrap_or(AnyValue::Null);
        if !matches!(before, AnyValue::Null) && matches!(after, AnyValue::Null) {
            return match before {
                AnyValue::String(value) => value.to_string(),
                AnyValue::StringOwned(value) => value.to_string(),
                other => other.to_string(),
            };
        }
    }
    String::new()
}

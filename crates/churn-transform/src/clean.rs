//! Column-level cleanup ahead of encoding.

use anyhow::Result;
use polars::prelude::{DataFrame, DataType};

use churn_model::{PrepError, schema};

fn drop_required(frame: &DataFrame, name: &str) -> Result<DataFrame> {
    if frame.column(name).is_err() {
        return Err(PrepError::MissingColumn(name.to_string()).into());
    }
    Ok(frame.drop(name)?)
}

/// Drop the phone number column. Unique per customer, so it carries no
/// signal for the classifier.
pub fn drop_phone(frame: &DataFrame) -> Result<DataFrame> {
    drop_required(frame, schema::PHONE)
}

/// Drop the charge columns, which are linear in the retained "Minutes"
/// columns.
pub fn drop_charge_columns(frame: &DataFrame) -> Result<DataFrame> {
    let mut out = frame.clone();
    for name in schema::CHARGE_COLUMNS {
        out = drop_required(&out, name)?;
    }
    Ok(out)
}

/// Recast `Area Code` to text so the encoder treats it as a category
/// rather than a magnitude.
pub fn area_code_as_category(frame: &DataFrame) -> Result<DataFrame> {
    let column = frame
        .column(schema::AREA_CODE)
        .map_err(|_| PrepError::MissingColumn(schema::AREA_CODE.to_string()))?;
    let as_text = column.cast(&DataType::String)?;
    let mut out = frame.clone();
    out.with_column(as_text)?;
    Ok(out)
}

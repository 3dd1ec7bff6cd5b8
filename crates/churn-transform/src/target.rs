//! Churn target handling after encoding.

use anyhow::Result;
use polars::prelude::{Column, DataFrame};

use churn_model::{PrepError, schema};

/// Move the positive churn indicator to the front and drop its complement.
///
/// Both indicators must exist; a churn column with a single level in the
/// source data is a schema failure, not something to paper over.
pub fn promote_target(frame: &DataFrame) -> Result<DataFrame> {
    let target = frame
        .column(schema::CHURN_TRUE)
        .map_err(|_| PrepError::MissingColumn(schema::CHURN_TRUE.to_string()))?
        .clone();
    if frame.column(schema::CHURN_FALSE).is_err() {
        return Err(PrepError::MissingColumn(schema::CHURN_FALSE.to_string()).into());
    }
    let rest = frame.drop(schema::CHURN_TRUE)?.drop(schema::CHURN_FALSE)?;
    let front = DataFrame::new(vec![target])?;
    Ok(front.hstack(rest.get_columns())?)
}

/// Remove the target column from a feature frame, returning the features
/// and the withheld label column.
pub fn withhold_target(frame: &DataFrame) -> Result<(DataFrame, Column)> {
    let labels = frame
        .column(schema::CHURN_TRUE)
        .map_err(|_| PrepError::MissingColumn(schema::CHURN_TRUE.to_string()))?
        .clone();
    let features = frame.drop(schema::CHURN_TRUE)?;
    Ok((features, labels))
}

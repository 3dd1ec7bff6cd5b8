//! Preparation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the source CSV, verify required columns, build the frame
//! 2. **Transform**: drop/recast columns, one-hot encode, front the target, cast to float
//! 3. **Split**: seeded train/holdout and validation/test row splits, withhold test labels
//! 4. **Output**: write the three partition CSVs
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::debug;

use churn_ingest::{ensure_required_columns, read_csv_table, table_to_frame};
use churn_model::{Partition, ProcessingLayout, schema};
use churn_output::write_partition_outputs;
use churn_transform::{
    SplitSpec, area_code_as_category, cast_all_float, drop_charge_columns, drop_phone,
    one_hot_encode, promote_target, split_rows, withhold_target,
};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// The typed source frame.
    pub frame: DataFrame,
    /// Source row count (data rows, header excluded).
    pub rows: usize,
    /// Source column count.
    pub columns: usize,
}

/// Read and verify the source file.
pub fn ingest(input_file: &Path) -> Result<IngestResult> {
    let table = read_csv_table(input_file)?;
    let frame = table_to_frame(&table).context("build source frame")?;
    ensure_required_columns(&frame)?;
    Ok(IngestResult {
        rows: frame.height(),
        columns: frame.width(),
        frame,
    })
}

// ============================================================================
// Stage 2: Transform
// ============================================================================

/// Apply the column edits in order: drop the phone number, recast the area
/// code, drop the charge columns, one-hot encode, front the churn target,
/// cast everything to float.
pub fn transform(frame: &DataFrame) -> Result<DataFrame> {
    let frame = drop_phone(frame).context("drop phone column")?;
    let frame = area_code_as_category(&frame).context("recast area code")?;
    let frame = drop_charge_columns(&frame).context("drop charge columns")?;
    let frame = one_hot_encode(&frame).context("one-hot encode")?;
    let frame = promote_target(&frame).context("front churn target")?;
    cast_all_float(&frame).context("cast to float")
}

// ============================================================================
// Stage 3: Split
// ============================================================================

/// Result of the split stage: three row-disjoint partitions. The test frame
/// has its label column already withheld.
#[derive(Debug)]
pub struct SplitResult {
    pub train: DataFrame,
    pub validation: DataFrame,
    pub test: DataFrame,
}

/// Split the transformed frame into train/validation/test.
pub fn split(frame: &DataFrame) -> Result<SplitResult> {
    let holdout_spec = SplitSpec::new(schema::HOLDOUT_FRACTION, schema::SPLIT_SEED)?;
    let (train, holdout) = split_rows(frame, holdout_spec).context("split train/holdout")?;

    let test_spec = SplitSpec::new(schema::TEST_FRACTION, schema::SPLIT_SEED)?;
    let (validation, test) = split_rows(&holdout, test_spec).context("split validation/test")?;

    // The test labels are computed but never written.
    let (test, labels) = withhold_target(&test).context("withhold test labels")?;
    let positives = labels
        .f64()?
        .iter()
        .flatten()
        .filter(|value| *value == 1.0)
        .count();
    debug!(rows = labels.len(), positives, "test labels withheld");

    Ok(SplitResult {
        train,
        validation,
        test,
    })
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Write the partitions to their fixed locations.
pub fn output(layout: &ProcessingLayout, result: &SplitResult) -> Result<Vec<(Partition, PathBuf)>> {
    write_partition_outputs(
        layout,
        &[
            (Partition::Train, &result.train),
            (Partition::Validation, &result.validation),
            (Partition::Test, &result.test),
        ],
    )
}

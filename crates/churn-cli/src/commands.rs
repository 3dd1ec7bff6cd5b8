use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Result, anyhow};
use tracing::{info, info_span};

use churn_model::{Partition, ProcessingLayout};

use crate::pipeline::{IngestResult, SplitResult, ingest, output, split, transform};
use crate::types::{PartitionSummary, PrepareResult};

/// Run the whole preparation pipeline against the given layout.
pub fn run_prepare(layout: &ProcessingLayout) -> Result<PrepareResult> {
    let input_file = layout.input_file();
    let run_span = info_span!("prepare", input = %input_file.display());
    let _run_guard = run_span.enter();

    let ingest_span = info_span!("ingest", file = %input_file.display());
    let ingest_start = Instant::now();
    let IngestResult {
        frame,
        rows,
        columns,
    } = ingest_span.in_scope(|| ingest(&input_file))?;
    info!(
        rows,
        columns,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let transform_span = info_span!("transform");
    let transform_start = Instant::now();
    let transformed = transform_span.in_scope(|| transform(&frame))?;
    info!(
        rows = transformed.height(),
        columns = transformed.width(),
        duration_ms = transform_start.elapsed().as_millis(),
        "transform complete"
    );

    let split_span = info_span!("split");
    let split_start = Instant::now();
    let split_result = split_span.in_scope(|| split(&transformed))?;
    info!(
        train = split_result.train.height(),
        validation = split_result.validation.height(),
        test = split_result.test.height(),
        duration_ms = split_start.elapsed().as_millis(),
        "split complete"
    );

    let output_span = info_span!("output", root = %layout.root().display());
    let output_start = Instant::now();
    let written = output_span.in_scope(|| output(layout, &split_result))?;
    info!(
        files = written.len(),
        duration_ms = output_start.elapsed().as_millis(),
        "output complete"
    );

    build_result(input_file, rows, &split_result, written)
}

fn build_result(
    input_file: PathBuf,
    source_rows: usize,
    split_result: &SplitResult,
    written: Vec<(Partition, PathBuf)>,
) -> Result<PrepareResult> {
    let mut partitions = Vec::with_capacity(written.len());
    for (partition, path) in written {
        let frame = match partition {
            Partition::Train => &split_result.train,
            Partition::Validation => &split_result.validation,
            Partition::Test => &split_result.test,
        };
        partitions.push(PartitionSummary {
            partition,
            rows: frame.height(),
            columns: frame.width(),
            path,
        });
    }
    let written_rows: usize = partitions.iter().map(|summary| summary.rows).sum();
    if written_rows != source_rows {
        return Err(anyhow!(
            "partition rows ({written_rows}) do not add up to source rows ({source_rows})"
        ));
    }
    Ok(PrepareResult {
        input_file,
        source_rows,
        partitions,
    })
}

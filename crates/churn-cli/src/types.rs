use std::path::PathBuf;

use churn_model::Partition;

/// Outcome of a successful preparation run.
#[derive(Debug)]
pub struct PrepareResult {
    pub input_file: PathBuf,
    pub source_rows: usize,
    pub partitions: Vec<PartitionSummary>,
}

/// One written partition.
#[derive(Debug)]
pub struct PartitionSummary {
    pub partition: Partition,
    pub rows: usize,
    pub columns: usize,
    pub path: PathBuf,
}

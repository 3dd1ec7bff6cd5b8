//! CSV writers for model-ready partition frames.
//!
//! Output files carry no header row and no index column; downstream training
//! consumes them positionally, target first.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::debug;

use churn_model::{Partition, PrepError, ProcessingLayout};

/// Write one frame as headerless CSV, creating parent directories.
pub fn write_model_csv(path: &Path, frame: &DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(PrepError::Io)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    let mut file = File::create(path)
        .map_err(PrepError::Io)
        .with_context(|| format!("create {}", path.display()))?;
    let mut frame = frame.clone();
    CsvWriter::new(&mut file)
        .include_header(false)
        .finish(&mut frame)
        .with_context(|| format!("write {}", path.display()))?;
    debug!(path = %path.display(), rows = frame.height(), "wrote partition");
    Ok(())
}

/// Write every partition to its fixed location under the layout root.
///
/// Returns the written paths in partition order.
pub fn write_partition_outputs(
    layout: &ProcessingLayout,
    frames: &[(Partition, &DataFrame)],
) -> Result<Vec<(Partition, PathBuf)>> {
    let mut outputs = Vec::with_capacity(frames.len());
    for (partition, frame) in frames {
        let path = layout.partition_file(*partition);
        write_model_csv(&path, frame)?;
        outputs.push((*partition, path));
    }
    Ok(outputs)
}

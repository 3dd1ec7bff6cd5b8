//! Fixed processing directory layout.
//!
//! Paths are not configurable at the CLI; the layout type exists so the
//! pipeline and its tests can run against any root directory.

use std::path::PathBuf;

/// Default processing root used by the `churn-prep` binary.
pub const PROCESSING_ROOT: &str = "/opt/ml/processing";

/// Name of the source file under `<root>/input/`.
pub const INPUT_FILE_NAME: &str = "churn.txt";

/// One of the three output partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Train,
    Validation,
    Test,
}

impl Partition {
    /// All partitions in output order.
    pub const ALL: [Partition; 3] = [Partition::Train, Partition::Validation, Partition::Test];

    /// Directory under `<root>/output/` holding this partition's file.
    pub fn dir_name(self) -> &'static str {
        match self {
            Partition::Train => "train",
            Partition::Validation => "validation",
            Partition::Test => "test",
        }
    }

    /// File name of this partition's CSV.
    pub fn file_name(self) -> &'static str {
        match self {
            Partition::Train => "train.csv",
            Partition::Validation => "validation.csv",
            Partition::Test => "test.csv",
        }
    }

    /// Human-readable label for summaries.
    pub fn label(self) -> &'static str {
        match self {
            Partition::Train => "Train",
            Partition::Validation => "Validation",
            Partition::Test => "Test",
        }
    }
}

/// Root-anchored locations of the input file and partition outputs.
#[derive(Debug, Clone)]
pub struct ProcessingLayout {
    root: PathBuf,
}

impl Default for ProcessingLayout {
    fn default() -> Self {
        Self::new(PROCESSING_ROOT)
    }
}

impl ProcessingLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn input_file(&self) -> PathBuf {
        self.root.join("input").join(INPUT_FILE_NAME)
    }

    pub fn partition_file(&self, partition: Partition) -> PathBuf {
        self.root
            .join("output")
            .join(partition.dir_name())
            .join(partition.file_name())
    }
}

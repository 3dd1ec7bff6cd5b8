//! Output generation: partition frames to CSV files.

pub mod writer;

pub use writer::{write_model_csv, write_partition_outputs};

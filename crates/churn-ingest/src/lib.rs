//! Data ingestion: CSV reading and DataFrame construction.

pub mod csv_table;
pub mod frame;
pub mod value;

pub use csv_table::{CsvTable, read_csv_table};
pub use frame::{ColumnKind, ensure_required_columns, table_to_frame};
pub use value::{parse_f64, parse_i64};

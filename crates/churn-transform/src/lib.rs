//! Frame transformations for churn dataset preparation.
//!
//! Each function is a total function of its input frame; the CLI pipeline
//! applies them in a fixed order. Nothing here reads or writes files.

pub mod clean;
pub mod encode;
pub mod numeric;
pub mod split;
pub mod target;

pub use clean::{area_code_as_category, drop_charge_columns, drop_phone};
pub use encode::one_hot_encode;
pub use numeric::cast_all_float;
pub use split::{SplitSpec, split_rows};
pub use target::{promote_target, withhold_target};

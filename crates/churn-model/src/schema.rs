//! Source schema and split parameters.
//!
//! Column names match the churn source file verbatim, including the
//! punctuation the one-hot encoder folds into indicator names
//! (`Churn?` with levels `True.` / `False.` becomes `Churn?_True.` /
//! `Churn?_False.`).

/// Unique phone number, dropped before modeling.
pub const PHONE: &str = "Phone";

/// Numeric in the source file but categorical in meaning.
pub const AREA_CODE: &str = "Area Code";

/// Categorical churn indicator in the source file.
pub const CHURN_COLUMN: &str = "Churn?";

/// Positive churn indicator produced by one-hot encoding.
pub const CHURN_TRUE: &str = "Churn?_True.";

/// Negative churn indicator, redundant for a binary label.
pub const CHURN_FALSE: &str = "Churn?_False.";

pub const DAY_CHARGE: &str = "Day Charge";
pub const EVE_CHARGE: &str = "Eve Charge";
pub const NIGHT_CHARGE: &str = "Night Charge";
pub const INTL_CHARGE: &str = "Intl Charge";

/// Charge columns are linear in the corresponding "Minutes" columns and are
/// dropped to reduce multicollinearity.
pub const CHARGE_COLUMNS: [&str; 4] = [DAY_CHARGE, EVE_CHARGE, NIGHT_CHARGE, INTL_CHARGE];

/// Columns the input file must carry for the run to proceed.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    PHONE,
    AREA_CODE,
    DAY_CHARGE,
    EVE_CHARGE,
    NIGHT_CHARGE,
    INTL_CHARGE,
    CHURN_COLUMN,
];

/// Seed for both row splits. Fixed so repeated runs over the same input
/// produce identical files.
pub const SPLIT_SEED: u64 = 42;

/// Fraction of all rows held out from training.
pub const HOLDOUT_FRACTION: f64 = 0.33;

/// Fraction of the holdout assigned to the test partition.
pub const TEST_FRACTION: f64 = 0.33;

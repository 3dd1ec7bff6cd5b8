use std::fs;

use polars::prelude::DataType;
use tempfile::tempdir;

use churn_ingest::{ensure_required_columns, read_csv_table, table_to_frame};

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn reads_table_and_normalizes_headers() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "data.csv",
        "\u{feff} Area  Code ,State, Churn? \n415,KS,False.\n408,OH,True.\n",
    );

    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers, vec!["Area Code", "State", "Churn?"]);
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0], vec!["415", "KS", "False."]);
    assert_eq!(table.column_index("State"), Some(1));
    assert_eq!(table.column_index("Phone"), None);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("absent.csv");
    assert!(read_csv_table(&path).is_err());
}

#[test]
fn ragged_records_are_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(&dir, "ragged.csv", "A,B\n1,2\n3\n");
    assert!(read_csv_table(&path).is_err());
}

#[test]
fn frame_columns_are_typed_by_content() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "typed.csv",
        "Account Length,Day Mins,State,VMail Message\n128,265.1,KS,25\n107,161.6,OH,\n",
    );

    let table = read_csv_table(&path).expect("read csv");
    let frame = table_to_frame(&table).expect("build frame");

    assert_eq!(
        frame.column("Account Length").unwrap().dtype(),
        &DataType::Int64
    );
    assert_eq!(
        frame.column("Day Mins").unwrap().dtype(),
        &DataType::Float64
    );
    assert_eq!(frame.column("State").unwrap().dtype(), &DataType::String);
    // Trailing empty cell becomes a null, not a text column.
    let vmail = frame.column("VMail Message").unwrap();
    assert_eq!(vmail.dtype(), &DataType::Int64);
    assert_eq!(vmail.null_count(), 1);
}

#[test]
fn required_columns_are_enforced() {
    let dir = tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "partial.csv",
        "Phone,Area Code,Day Charge,Eve Charge,Night Charge,Intl Charge,Churn?\n\
         382-4657,415,45.07,16.78,11.01,2.7,False.\n",
    );
    let frame = table_to_frame(&read_csv_table(&path).expect("read csv")).expect("build frame");
    ensure_required_columns(&frame).expect("all required columns present");

    let path = write_csv(&dir, "missing.csv", "Phone,State\n382-4657,KS\n");
    let frame = table_to_frame(&read_csv_table(&path).expect("read csv")).expect("build frame");
    let error = ensure_required_columns(&frame).unwrap_err();
    assert!(error.to_string().contains("Area Code"));
}

//! Tests for the column edits and encoding steps.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

use churn_transform::{
    area_code_as_category, cast_all_float, drop_charge_columns, drop_phone, one_hot_encode,
    promote_target, withhold_target,
};

fn column_f64(name: &str, values: Vec<f64>) -> Column {
    Series::new(name.into(), values).into_column()
}

fn column_str(name: &str, values: Vec<&str>) -> Column {
    Series::new(name.into(), values).into_column()
}

fn source_frame() -> DataFrame {
    DataFrame::new(vec![
        column_str("Phone", vec!["382-4657", "371-7191", "358-1921"]),
        Series::new("Area Code".into(), vec![415i64, 408, 415]).into_column(),
        column_f64("Day Mins", vec![265.1, 161.6, 243.4]),
        column_f64("Day Charge", vec![45.07, 27.47, 41.38]),
        column_f64("Eve Charge", vec![16.78, 16.62, 10.3]),
        column_f64("Night Charge", vec![11.01, 11.45, 7.32]),
        column_f64("Intl Charge", vec![2.7, 3.7, 3.29]),
        column_str("Churn?", vec!["False.", "True.", "False."]),
    ])
    .unwrap()
}

#[test]
fn drops_phone_column() {
    let frame = drop_phone(&source_frame()).unwrap();
    assert!(frame.column("Phone").is_err());
    assert_eq!(frame.height(), 3);
}

#[test]
fn missing_phone_is_a_schema_failure() {
    let frame = source_frame().drop("Phone").unwrap();
    let error = drop_phone(&frame).unwrap_err();
    assert!(error.to_string().contains("Phone"));
}

#[test]
fn drops_all_charge_columns() {
    let frame = drop_charge_columns(&source_frame()).unwrap();
    for name in ["Day Charge", "Eve Charge", "Night Charge", "Intl Charge"] {
        assert!(frame.column(name).is_err(), "{name} should be gone");
    }
    assert!(frame.column("Day Mins").is_ok());
}

#[test]
fn area_code_becomes_text_without_fraction_suffix() {
    let frame = area_code_as_category(&source_frame()).unwrap();
    let area = frame.column("Area Code").unwrap();
    assert_eq!(area.dtype(), &DataType::String);
    assert_eq!(area.str().unwrap().get(0), Some("415"));
    assert_eq!(area.str().unwrap().get(1), Some("408"));
}

#[test]
fn one_hot_keeps_numeric_first_and_sorts_levels() {
    let frame = DataFrame::new(vec![
        column_str("Plan", vec!["yes", "no", "yes"]),
        column_f64("Mins", vec![1.0, 2.0, 3.0]),
        column_str("Churn?", vec!["False.", "True.", "False."]),
    ])
    .unwrap();

    let encoded = one_hot_encode(&frame).unwrap();
    let names: Vec<&str> = encoded.get_column_names_str();
    assert_eq!(
        names,
        vec!["Mins", "Plan_no", "Plan_yes", "Churn?_False.", "Churn?_True."]
    );

    let plan_yes = encoded.column("Plan_yes").unwrap().f64().unwrap();
    assert_eq!(plan_yes.get(0), Some(1.0));
    assert_eq!(plan_yes.get(1), Some(0.0));
    assert_eq!(plan_yes.get(2), Some(1.0));

    let churn_true = encoded.column("Churn?_True.").unwrap().f64().unwrap();
    assert_eq!(churn_true.get(0), Some(0.0));
    assert_eq!(churn_true.get(1), Some(1.0));
}

#[test]
fn one_hot_null_cell_is_zero_in_every_indicator() {
    let frame = DataFrame::new(vec![
        Series::new("Plan".into(), vec![Some("yes"), None, Some("no")]).into_column(),
    ])
    .unwrap();

    let encoded = one_hot_encode(&frame).unwrap();
    let yes = encoded.column("Plan_yes").unwrap().f64().unwrap();
    let no = encoded.column("Plan_no").unwrap().f64().unwrap();
    assert_eq!(yes.get(1), Some(0.0));
    assert_eq!(no.get(1), Some(0.0));
}

#[test]
fn promote_target_fronts_churn_and_drops_complement() {
    let frame = DataFrame::new(vec![
        column_f64("Mins", vec![1.0, 2.0]),
        column_f64("Churn?_False.", vec![1.0, 0.0]),
        column_f64("Churn?_True.", vec![0.0, 1.0]),
    ])
    .unwrap();

    let promoted = promote_target(&frame).unwrap();
    let names: Vec<&str> = promoted.get_column_names_str();
    assert_eq!(names, vec!["Churn?_True.", "Mins"]);
}

#[test]
fn promote_target_requires_both_indicators() {
    let frame = DataFrame::new(vec![
        column_f64("Mins", vec![1.0]),
        column_f64("Churn?_True.", vec![1.0]),
    ])
    .unwrap();
    let error = promote_target(&frame).unwrap_err();
    assert!(error.to_string().contains("Churn?_False."));
}

#[test]
fn withhold_target_returns_features_and_labels() {
    let frame = DataFrame::new(vec![
        column_f64("Churn?_True.", vec![1.0, 0.0]),
        column_f64("Mins", vec![1.0, 2.0]),
    ])
    .unwrap();

    let (features, labels) = withhold_target(&frame).unwrap();
    assert!(features.column("Churn?_True.").is_err());
    assert_eq!(features.width(), 1);
    assert_eq!(labels.f64().unwrap().get(0), Some(1.0));
}

#[test]
fn cast_all_float_converts_integer_columns() {
    let frame = DataFrame::new(vec![
        Series::new("Calls".into(), vec![110i64, 123]).into_column(),
        column_f64("Mins", vec![265.1, 161.6]),
    ])
    .unwrap();

    let casted = cast_all_float(&frame).unwrap();
    for column in casted.get_columns() {
        assert_eq!(column.dtype(), &DataType::Float64);
    }
}

#[test]
fn cast_all_float_rejects_text_values() {
    let frame = DataFrame::new(vec![column_str("State", vec!["KS", "OH"])]).unwrap();
    let error = cast_all_float(&frame).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("State"));
    assert!(message.contains("KS"));
}

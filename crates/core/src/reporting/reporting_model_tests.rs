//! Wire-format tests: the dashboard addresses columns by these exact names.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

use crate::brokers::PrimeBroker;

use super::{BookAggregateRow, BookHistoryPoint, PbActualRow};

fn sample_row() -> BookAggregateRow {
    let margins: BTreeMap<PrimeBroker, Decimal> = PrimeBroker::ALL
        .iter()
        .map(|pb| (*pb, dec!(1)))
        .collect();
    BookAggregateRow {
        book: "A".to_string(),
        margins,
        total_margin: dec!(4),
        total_gmv: dec!(40),
        margin_rate: Some(dec!(0.1)),
    }
}

#[test]
fn book_rows_carry_the_verbatim_column_names() {
    let value = serde_json::to_value(sample_row()).unwrap();
    let object = value.as_object().unwrap();
    for key in [
        "book",
        "ABN",
        "GS",
        "JPM",
        "NOMURA",
        "Total Margin",
        "Total GMV",
        "Margin Rate",
    ] {
        assert!(object.contains_key(key), "missing column {key}");
    }
    assert_eq!(object.len(), 8);
}

#[test]
fn undefined_margin_rate_serializes_as_null() {
    let mut row = sample_row();
    row.margin_rate = None;
    let value = serde_json::to_value(row).unwrap();
    assert!(value.get("Margin Rate").unwrap().is_null());
}

#[test]
fn pb_actual_rows_carry_the_verbatim_column_names() {
    let row = PbActualRow {
        pb: "GS".to_string(),
        actual_margin: dec!(110),
        replication: dec!(100),
        deviation: Some(dec!(0.09)),
    };
    let value = serde_json::to_value(row).unwrap();
    let object = value.as_object().unwrap();
    for key in ["pb", "pb actual margin", "margin replication", "deviation"] {
        assert!(object.contains_key(key), "missing column {key}");
    }
}

#[test]
fn history_points_use_the_chart_field_names() {
    let point = BookHistoryPoint {
        business_date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        margin_rate: Some(dec!(0.1)),
    };
    let value = serde_json::to_value(point).unwrap();
    let object = value.as_object().unwrap();
    assert!(object.contains_key("businessdate"));
    assert!(object.contains_key("margin rate"));
}

use crate::config::AVERAGE_SCHEMA;
use crate::error::ReportError;
use crate::report::types::{Cell, Column, ReportKind, headers, parse_schema};

#[test]
fn average_schema_headers() {
    assert_eq!(
        headers(AVERAGE_SCHEMA),
        vec!["handler", "total", "avg_response_time"]
    );
}

#[test]
fn parse_schema_resolves_known_columns() {
    let schema = parse_schema(&["total", "handler"]).unwrap();

    assert_eq!(schema, vec![Column::Total, Column::Handler]);
}

#[test]
fn parse_schema_rejects_unknown_column() {
    let err = parse_schema(&["handler", "p99"]).unwrap_err();

    assert!(matches!(err, ReportError::UnknownColumn { ref id } if id == "p99"));
}

#[test]
fn report_kind_round_trips_its_name() {
    let kind: ReportKind = "average".parse().unwrap();

    assert_eq!(kind, ReportKind::Average);
    assert_eq!(kind.to_string(), "average");
    assert_eq!(kind.schema(), AVERAGE_SCHEMA);
}

#[test]
fn report_kind_rejects_other_names() {
    let err = "median".parse::<ReportKind>().unwrap_err();

    assert!(matches!(err, ReportError::UnsupportedReportType { ref name } if name == "median"));
}

#[test]
fn cells_display_their_values() {
    assert_eq!(Cell::from("/a").to_string(), "/a");
    assert_eq!(Cell::from(3u64).to_string(), "3");
    assert_eq!(Cell::from(0.022).to_string(), "0.022");
    assert!(Cell::from(1.5).is_numeric());
    assert!(!Cell::from("x").is_numeric());
}

#[test]
fn floats_use_six_significant_digits() {
    assert_eq!(Cell::from(0.04).to_string(), "0.04");
    assert_eq!(Cell::from(2.0).to_string(), "2");
    assert_eq!(Cell::from(0.0).to_string(), "0");
    assert_eq!(Cell::from(1e-5).to_string(), "1e-05");
    assert_eq!(Cell::from(0.0001).to_string(), "0.0001");
    assert_eq!(Cell::from(123456.789).to_string(), "123457");
    assert_eq!(Cell::from(1234567.0).to_string(), "1.23457e+06");
}

use crate::error::ReportError;
use crate::report::types::{Cell, Column};
use crate::report::EndpointStats;

const KEY: &str = "test/url/";
const FAKE_TIMES: &[f64] = &[0.024, 0.02, 0.024, 0.06, 0.032];

fn filled() -> EndpointStats {
    let mut stats = EndpointStats::new(KEY);
    for t in FAKE_TIMES {
        stats.add_response_time(*t);
        stats.add_request();
    }
    stats
}

#[test]
fn new_stats_start_empty() {
    let stats = EndpointStats::new(KEY);

    assert_eq!(stats.key(), KEY);
    assert_eq!(stats.total_requests(), 0);
    assert_eq!(stats.total_response_time(), 0.0);
}

#[test]
fn add_request_counts_each_call() {
    let mut stats = EndpointStats::new(KEY);

    for i in 0..FAKE_TIMES.len() {
        stats.add_request();
        assert_eq!(stats.total_requests(), i as u64 + 1);
    }
}

#[test]
fn add_response_time_sums_in_order() {
    let mut stats = EndpointStats::new(KEY);
    let mut expected = 0.0;

    for t in FAKE_TIMES {
        stats.add_response_time(*t);
        expected += *t;
        assert_eq!(stats.total_response_time(), expected);
    }
}

#[test]
fn average_is_rounded_to_three_places() {
    // Arrange
    let stats = filled();

    // Act
    let avg = stats.average_response_time().unwrap();

    // Assert
    assert_eq!(avg, 0.032);
}

#[test]
fn average_rounds_long_fractions() {
    let mut stats = EndpointStats::new(KEY);
    for t in [0.1, 0.2, 0.2] {
        stats.add_request();
        stats.add_response_time(t);
    }

    assert_eq!(stats.average_response_time().unwrap(), 0.167);
}

#[test]
fn average_rounds_from_the_stored_value() {
    // Arrange: both pairs average to 0.1235, which is stored just below the tie
    let mut first = EndpointStats::new(KEY);
    let mut second = EndpointStats::new(KEY);
    for (a, b) in [(0.123, 0.1), (0.124, 0.147)] {
        first.add_request();
        first.add_response_time(a);
        second.add_request();
        second.add_response_time(b);
    }

    // Act
    let first_avg = first.average_response_time().unwrap();
    let second_avg = second.average_response_time().unwrap();

    // Assert
    assert_eq!(first_avg, 0.123);
    assert_eq!(second_avg, 0.123);
}

#[test]
fn average_without_requests_is_division_by_zero() {
    let stats = EndpointStats::new(KEY);

    let err = stats.average_response_time().unwrap_err();

    assert!(matches!(err, ReportError::DivisionByZero { ref key } if key == KEY));
}

#[test]
fn to_row_follows_schema_order() {
    // Arrange
    let stats = filled();

    // Act
    let row = stats
        .to_row(&[Column::AvgResponseTime, Column::Handler, Column::Total])
        .unwrap();

    // Assert
    assert_eq!(
        row.cells(),
        &[
            Cell::Float(0.032),
            Cell::Str(KEY.to_string()),
            Cell::Int(FAKE_TIMES.len() as u64),
        ]
    );
}

#[test]
fn to_row_with_average_column_fails_without_requests() {
    let stats = EndpointStats::new(KEY);

    assert!(stats.to_row(&[Column::Handler, Column::Total]).is_ok());
    assert!(matches!(
        stats.to_row(crate::config::AVERAGE_SCHEMA),
        Err(ReportError::DivisionByZero { .. })
    ));
}

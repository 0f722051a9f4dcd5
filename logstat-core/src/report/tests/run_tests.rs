use crate::error::ReportError;
use crate::report::ReportKind;
use crate::run_report;
use std::fs;
use tempfile::tempdir;

#[test]
fn run_report_stops_at_missing_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.log");
    let missing = dir.path().join("missing.log");
    fs::write(&good, "{\"url\": \"/a\", \"response_time\": 0.1}\n").unwrap();

    // Act
    let err = run_report(&[&good, &missing], ReportKind::Average).unwrap_err();

    // Assert
    assert!(matches!(err, ReportError::FileNotFound { ref path, .. } if *path == missing));
}

#[test]
fn run_report_surfaces_decode_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.log");
    fs::write(&path, "{\"url\": \"/a\", \"response_time\": 0.1}\n{oops\n").unwrap();

    let err = run_report(&[&path], ReportKind::Average).unwrap_err();

    assert!(matches!(err, ReportError::Decode { line: 2, .. }));
}

#[test]
fn run_report_on_empty_file_renders_headers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.log");
    fs::write(&path, "").unwrap();

    let table = run_report(&[&path], ReportKind::Average).unwrap();

    assert!(table.starts_with("handler"));
    assert_eq!(table.lines().count(), 2);
}

use crate::error::ReportError;
use crate::report::registry::StatsRegistry;
use crate::report::types::{ReportKind, ReportRow};
use std::cmp::Reverse;

/// Builds the rows of a `kind` report, busiest endpoints first.
///
/// Endpoints with the same total keep the registry's order.
pub fn build_report(
    registry: &StatsRegistry,
    kind: ReportKind,
) -> Result<Vec<ReportRow>, ReportError> {
    let mut stats: Vec<_> = registry.values().collect();
    // stable: ties keep encounter order
    stats.sort_by_key(|s| Reverse(s.total_requests()));

    stats.iter().map(|s| s.to_row(kind.schema())).collect()
}

/// Same as [`build_report`] but takes the report name as given on the command line.
pub fn build_named_report(
    registry: &StatsRegistry,
    name: &str,
) -> Result<Vec<ReportRow>, ReportError> {
    let kind: ReportKind = name.parse()?;
    build_report(registry, kind)
}

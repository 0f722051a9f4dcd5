use crate::error::ReportError;
use crate::report::builder::build_report;
use crate::report::ingest::ingest_file;
use crate::report::registry::StatsRegistry;
use crate::report::render::render_table;
use crate::report::types::{ReportKind, headers};
use std::path::Path;
use tracing::info;

/// Ingests `files` in order and returns the rendered `kind` report.
///
/// The first error aborts the run; files after a failing one are never opened.
pub fn run_report<P: AsRef<Path>>(files: &[P], kind: ReportKind) -> Result<String, ReportError> {
    let mut registry = StatsRegistry::new();

    for path in files {
        ingest_file(&mut registry, path.as_ref())?;
    }

    info!(
        files = files.len(),
        endpoints = registry.len(),
        requests = registry.total_requests(),
        report = %kind,
        "log files aggregated"
    );

    let rows = build_report(&registry, kind)?;
    Ok(render_table(&headers(kind.schema()), &rows))
}

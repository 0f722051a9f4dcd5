use crate::error::ReportError;
use crate::report::registry::StatsRegistry;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

pub const URL_FIELD: &str = "url";
pub const RESPONSE_TIME_FIELD: &str = "response_time";

/// Adds one decoded log record to the registry.
///
/// Only `url` (string) and `response_time` (number) are read; every other field
/// is ignored.
pub fn ingest(registry: &mut StatsRegistry, record: &Value) -> Result<(), ReportError> {
    let url = record
        .get(URL_FIELD)
        .and_then(Value::as_str)
        .ok_or(ReportError::MissingField { field: URL_FIELD })?;

    let response_time = record
        .get(RESPONSE_TIME_FIELD)
        .and_then(Value::as_f64)
        .ok_or(ReportError::MissingField {
            field: RESPONSE_TIME_FIELD,
        })?;

    registry.record(url, response_time);
    Ok(())
}

/// Ingests every line of `reader`, stopping at the first bad line.
///
/// `source` only names the input in errors. Returns the number of records ingested.
pub fn ingest_lines<R: BufRead>(
    registry: &mut StatsRegistry,
    reader: R,
    source: &Path,
) -> Result<usize, ReportError> {
    let mut ingested = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ReportError::read(source, e))?;

        let record = serde_json::from_str::<Value>(&line)
            .map_err(|e| ReportError::decode(source, idx + 1, e))?;

        ingest(registry, &record)?;
        ingested += 1;
    }

    Ok(ingested)
}

/// Opens `path` and ingests it. The file is closed before this returns,
/// on success or failure.
pub fn ingest_file(registry: &mut StatsRegistry, path: &Path) -> Result<usize, ReportError> {
    let file = File::open(path).map_err(|e| ReportError::file_not_found(path, e))?;
    debug!(path = %path.display(), "reading log file");

    let ingested = ingest_lines(registry, BufReader::new(file), path)?;
    debug!(path = %path.display(), records = ingested, "log file ingested");

    Ok(ingested)
}

use serde_json::{Value, json};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding line-delimited JSON log files.
pub struct LogFixture {
    dir: TempDir,
}

impl LogFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create fixture dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes one record per line to `name` and returns the full path.
    pub fn write_records(&self, name: &str, records: &[Value]) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut file = File::create(&path).expect("failed to create log file");

        for record in records {
            serde_json::to_writer(&mut file, record).expect("failed to write record");
            file.write_all(b"\n").expect("failed to write newline");
        }

        path
    }

    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write log file");
        path
    }
}

impl Default for LogFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Four requests across three endpoints, as an nginx JSON access log would emit them.
pub fn sample_records() -> Vec<Value> {
    vec![
        record("2025-06-22T13:57:32+00:00", "/api/context/...", 0.024),
        record("2025-06-22T13:57:32+00:00", "/api/context/...", 0.02),
        record("2025-06-22T13:57:32+00:00", "/api/homeworks/...", 0.024),
        record("2025-06-22T13:57:34+00:00", "/api/specializations/...", 0.04),
    ]
}

fn record(ts: &str, url: &str, response_time: f64) -> Value {
    json!({
        "@timestamp": ts,
        "status": 200,
        "url": url,
        "request_method": "GET",
        "response_time": response_time,
        "http_user_agent": "...",
    })
}

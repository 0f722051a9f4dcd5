use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    // IO
    #[error("failed to open log file {path}: {source}")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Decoding
    #[error("invalid JSON in {path} at line {line}: {source}")]
    Decode {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("log record is missing required field '{field}'")]
    MissingField { field: &'static str },

    // Statistics
    #[error("average response time requested for '{key}' before any request was recorded")]
    DivisionByZero { key: String },

    // Report configuration
    #[error("no action specified for parameter \"--report {name}\"")]
    UnsupportedReportType { name: String },

    #[error("unknown report column '{id}'")]
    UnknownColumn { id: String },
}

impl ReportError {
    pub fn file_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileNotFound {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn decode(path: impl Into<PathBuf>, line: usize, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.into(),
            line,
            source,
        }
    }
}

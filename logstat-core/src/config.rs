//! Report configuration constants.
//!
//! Column names double as the table headers. The order of [`AVERAGE_SCHEMA`] is
//! the order of the cells in every row of an `average` report.

use crate::report::types::Column;

pub const AVERAGE_REPORT_NAME: &str = "average";

pub const URL_COLUMN_NAME: &str = "handler";
pub const REQUESTS_TOTAL_COLUMN_NAME: &str = "total";
pub const AVG_RESPONSE_TIME_COLUMN_NAME: &str = "avg_response_time";

pub const AVERAGE_SCHEMA: &[Column] = &[
    Column::Handler,
    Column::Total,
    Column::AvgResponseTime,
];

/// Decimal places kept by averages.
pub const ROUND_DIGITS: usize = 3;

/// Set to `json` to switch the stderr log output to flattened JSON.
pub const LOG_FORMAT_ENV: &str = "LOGSTAT_LOG_FORMAT";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

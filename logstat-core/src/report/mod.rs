//! Endpoint Report Pipeline
//!
//! Reads access logs written as one JSON object per line and summarizes them per
//! endpoint: how many requests each `url` received and how long they took on average.
//!
//! Every line is decoded and folded into a [`StatsRegistry`] as soon as it is read.
//! Once all files are consumed the registry is turned into report rows, ordered by
//! request count, and rendered as a text table.
//!
//! Any bad input (missing file, non-JSON line, record without `url` or
//! `response_time`) stops the run; there is no partial report.
//!
//! The overall data processing architecture is:
//!
//! log files
//! ingest_file
//! ingest
//! StatsRegistry
//! build_report
//! render_table
//!

mod builder;
mod endpoint_stats;
mod ingest;
mod registry;
mod render;
mod run;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::{build_named_report, build_report};
pub use endpoint_stats::EndpointStats;
pub use ingest::{ingest, ingest_file, ingest_lines};
pub use registry::StatsRegistry;
pub use render::render_table;
pub use run::run_report;
pub use types::{Cell, Column, ReportKind, ReportRow};

pub mod config;
pub mod error;
pub mod logging;
pub mod report;

pub use error::ReportError;
pub use report::run_report;

use crate::config::ROUND_DIGITS;
use crate::error::ReportError;
use crate::report::types::{Column, ReportRow};

/// Running statistics for a single endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointStats {
    key: String,
    total_requests: u64,
    total_response_time: f64,
}

impl EndpointStats {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            total_requests: 0,
            total_response_time: 0.0,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    pub fn total_response_time(&self) -> f64 {
        self.total_response_time
    }

    pub fn add_request(&mut self) {
        self.total_requests += 1;
    }

    /// Adds `response_time` to the running sum.
    ///
    /// The sign is not checked; a negative value skews the average.
    pub fn add_response_time(&mut self, response_time: f64) {
        self.total_response_time += response_time;
    }

    /// Mean response time rounded to [`ROUND_DIGITS`] decimal places.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::DivisionByZero` if no request has been added yet.
    pub fn average_response_time(&self) -> Result<f64, ReportError> {
        if self.total_requests == 0 {
            return Err(ReportError::DivisionByZero {
                key: self.key.clone(),
            });
        }

        let avg = self.total_response_time / self.total_requests as f64;
        Ok(round_to(avg, ROUND_DIGITS))
    }

    pub fn to_row(&self, schema: &[Column]) -> Result<ReportRow, ReportError> {
        let cells = schema
            .iter()
            .map(|column| column.extractor()(self))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ReportRow::new(cells))
    }
}

/// Rounds `value` to `digits` decimal places, deciding from its exact binary value
/// (0.1235 is stored just below the tie, so it rounds down to 0.123).
///
/// Every formatted `f64`, including `NaN` and `inf`, parses back; the fallback is unreachable.
pub(crate) fn round_to(value: f64, digits: usize) -> f64 {
    format!("{value:.digits$}").parse().unwrap_or(value)
}

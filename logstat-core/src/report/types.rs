use crate::config::{
    AVERAGE_REPORT_NAME, AVERAGE_SCHEMA, AVG_RESPONSE_TIME_COLUMN_NAME,
    REQUESTS_TOTAL_COLUMN_NAME, URL_COLUMN_NAME,
};
use crate::error::ReportError;
use crate::report::endpoint_stats::EndpointStats;
use std::fmt;
use std::str::FromStr;

/// Pulls one cell out of an endpoint's statistics.
pub type Extractor = fn(&EndpointStats) -> Result<Cell, ReportError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Handler,
    Total,
    AvgResponseTime,
}

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Handler => URL_COLUMN_NAME,
            Column::Total => REQUESTS_TOTAL_COLUMN_NAME,
            Column::AvgResponseTime => AVG_RESPONSE_TIME_COLUMN_NAME,
        }
    }

    pub fn extractor(self) -> Extractor {
        match self {
            Column::Handler => handler_cell,
            Column::Total => total_cell,
            Column::AvgResponseTime => avg_response_time_cell,
        }
    }
}

fn handler_cell(stats: &EndpointStats) -> Result<Cell, ReportError> {
    Ok(Cell::Str(stats.key().to_string()))
}

fn total_cell(stats: &EndpointStats) -> Result<Cell, ReportError> {
    Ok(Cell::Int(stats.total_requests()))
}

fn avg_response_time_cell(stats: &EndpointStats) -> Result<Cell, ReportError> {
    stats.average_response_time().map(Cell::Float)
}

impl FromStr for Column {
    type Err = ReportError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            URL_COLUMN_NAME => Ok(Column::Handler),
            REQUESTS_TOTAL_COLUMN_NAME => Ok(Column::Total),
            AVG_RESPONSE_TIME_COLUMN_NAME => Ok(Column::AvgResponseTime),
            other => Err(ReportError::UnknownColumn {
                id: other.to_string(),
            }),
        }
    }
}

/// Resolves textual column ids into a schema, failing on the first unknown id.
pub fn parse_schema<S: AsRef<str>>(ids: &[S]) -> Result<Vec<Column>, ReportError> {
    ids.iter().map(|id| id.as_ref().parse()).collect()
}

pub fn headers(schema: &[Column]) -> Vec<&'static str> {
    schema.iter().map(|c| c.header()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Average,
}

impl ReportKind {
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Average => AVERAGE_REPORT_NAME,
        }
    }

    pub fn schema(self) -> &'static [Column] {
        match self {
            ReportKind::Average => AVERAGE_SCHEMA,
        }
    }
}

impl FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            AVERAGE_REPORT_NAME => Ok(ReportKind::Average),
            other => Err(ReportError::UnsupportedReportType {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Str(String),
    Int(u64),
    Float(f64),
}

impl Cell {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Cell::Str(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Str(s) => f.write_str(s),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Float(v) => f.write_str(&format_general(*v)),
        }
    }
}

/// Formats a float with six significant digits, switching to exponent notation
/// below 1e-4 and from 1e6 up, with trailing zeros dropped (`printf`'s `%g`).
fn format_general(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let scientific = format!("{value:.5e}");
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exp.abs())
    } else {
        let decimals = (5 - exp) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Str(value.to_string())
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

/// One report line; cell order follows the schema it was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    cells: Vec<Cell>,
}

impl ReportRow {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

impl<const N: usize> From<[Cell; N]> for ReportRow {
    fn from(cells: [Cell; N]) -> Self {
        Self::new(cells.into())
    }
}

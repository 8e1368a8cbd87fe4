//! JSON payload builders for the report endpoints.

use std::fmt;
use std::io::Cursor;

use serde_json::json;

use crate::report::{
    read_report_grid, summarize_grid, ColumnRules, ReportError, DEFAULT_COLUMN_RULES_PATH,
};

#[derive(Debug)]
pub enum ReportPayloadError {
    /// Empty request body: nothing was uploaded.
    Empty,
    /// Document-level failure; the message is shown in place of the table.
    Report(ReportError),
    /// Response serialization failed.
    Serialize(serde_json::Error),
}

impl fmt::Display for ReportPayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "request body is empty; upload a workbook"),
            Self::Report(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize report: {err}"),
        }
    }
}

impl From<ReportError> for ReportPayloadError {
    fn from(err: ReportError) -> Self {
        Self::Report(err)
    }
}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "status": "ok",
        "service": "wellreport",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Summarize an uploaded workbook body into the report payload.
pub fn report_payload(body: &[u8]) -> Result<String, ReportPayloadError> {
    if body.is_empty() {
        return Err(ReportPayloadError::Empty);
    }
    let grid = read_report_grid(Cursor::new(body))?;
    let rules = ColumnRules::load(DEFAULT_COLUMN_RULES_PATH);
    let summary = summarize_grid("upload", &grid, &rules)?;
    serde_json::to_string_pretty(&summary).map_err(ReportPayloadError::Serialize)
}

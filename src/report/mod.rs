//! Production-report summarization: decode a workbook, locate the
//! `RUNNING WELLS` table, normalize rows, aggregate a TOTAL record.

use std::fmt;
use std::path::Path;

use serde::Serialize;

pub mod columns;
pub mod export;
pub mod grid;
pub mod locate;
pub mod normalize;
pub mod render;
pub mod workbook;

pub use columns::{ColumnRules, Field, DEFAULT_COLUMN_RULES_PATH};
pub use grid::RawGrid;
pub use locate::{locate, ColumnMap, TableLayout, HEADER_MARKER};
pub use normalize::{normalize, ReportResult, WellRecord, TOTAL_LABEL};
pub use workbook::{load_report_grid, read_report_grid, REPORT_SHEET};

#[derive(Debug)]
pub enum ReportError {
    /// Workbook could not be decoded at all.
    Workbook(calamine::Error),
    /// No sheet literally named `Report`.
    SheetNotFound { available: Vec<String> },
    /// No row contains the header marker text.
    TableNotFound,
    /// A required canonical field matched none of the column labels.
    RequiredColumnMissing { field: Field, detected: Vec<String> },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Workbook(err) => write!(f, "failed to read workbook: {err}"),
            Self::SheetNotFound { available } => write!(
                f,
                "no sheet named '{REPORT_SHEET}' (available: {})",
                available.join(", ")
            ),
            Self::TableNotFound => {
                write!(f, "could not locate the '{HEADER_MARKER}' header row")
            }
            Self::RequiredColumnMissing { field, detected } => write!(
                f,
                "required column '{field}' not found; detected columns: [{}]",
                detected.join(", ")
            ),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<calamine::Error> for ReportError {
    fn from(err: calamine::Error) -> Self {
        Self::Workbook(err)
    }
}

/// Resolved column label per canonical field, echoed into the payload so a
/// mis-detected column is visible next to the table it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectedColumns {
    pub well_name: String,
    pub production_zone: Option<String>,
    pub total_production: Option<String>,
    pub net_diff: String,
    pub water_cut: Option<String>,
}

impl DetectedColumns {
    fn from_layout(layout: &TableLayout) -> Self {
        let label = |field| layout.label_for(field).map(str::to_string);
        Self {
            well_name: label(Field::WellName).unwrap_or_default(),
            production_zone: label(Field::ProductionZone),
            total_production: label(Field::TotalProduction),
            net_diff: label(Field::NetDiff).unwrap_or_default(),
            water_cut: label(Field::WaterCut),
        }
    }
}

/// Full summarization output: the normalized report plus provenance.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub source: String,
    pub generated: String,
    pub header_row: usize,
    pub columns: DetectedColumns,
    pub wells: Vec<WellRecord>,
    pub total: WellRecord,
}

/// Locate and normalize an already-decoded grid.
pub fn summarize_grid(
    source: &str,
    grid: &[Vec<calamine::Data>],
    rules: &ColumnRules,
) -> Result<ReportSummary, ReportError> {
    let layout = locate(grid, rules)?;
    let result = normalize(grid, &layout);
    Ok(ReportSummary {
        source: source.to_string(),
        generated: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        header_row: layout.header_row,
        columns: DetectedColumns::from_layout(&layout),
        wells: result.wells,
        total: result.total,
    })
}

/// Summarize a workbook file on disk.
pub fn summarize_workbook(
    path: impl AsRef<Path>,
    rules: &ColumnRules,
) -> Result<ReportSummary, ReportError> {
    let path = path.as_ref();
    let grid = load_report_grid(path)?;
    summarize_grid(&path.display().to_string(), &grid, rules)
}

//! Turns the located table into the final report rows.
//!
//! Zone headers are rows that name a producing zone but carry no production
//! numbers; their value applies to every well row until the next zone header.
//! The report deliberately lists only wells with a recorded net difference,
//! and pre-existing TOTAL/CUM footers in the source are never data rows.

use calamine::Data;
use serde::Serialize;

use crate::report::grid::{cell_display, cell_is_blank, cell_to_f64};
use crate::report::locate::{ColumnMap, TableLayout};

/// Well-name marker of the synthetic totals record.
pub const TOTAL_LABEL: &str = "TOTAL";

/// Well-name fragments that mark a source footer row, not a well.
const FOOTER_MARKERS: [&str; 2] = ["total", "cum"];

/// One row of the final report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellRecord {
    pub well_name: String,
    pub production_zone: String,
    pub total_production: Option<f64>,
    pub net_diff: Option<f64>,
    pub water_cut: String,
}

/// Normalized report: retained well rows in source order plus the synthetic
/// TOTAL record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportResult {
    pub wells: Vec<WellRecord>,
    pub total: WellRecord,
}

enum RowKind {
    ZoneHeader(String),
    Well(WellRecord),
    Skip,
}

/// Normalize every row strictly below the header, threading the current zone
/// through a left-to-right fold over the rows.
pub fn normalize(grid: &[Vec<Data>], layout: &TableLayout) -> ReportResult {
    let rows = grid.get(layout.data_start..).unwrap_or_default();

    let (wells, _) = rows.iter().fold(
        (Vec::new(), String::new()),
        |(mut wells, zone), row| match classify(row, &layout.columns, &zone) {
            RowKind::ZoneHeader(name) => (wells, name),
            RowKind::Well(record) => {
                wells.push(record);
                (wells, zone)
            }
            RowKind::Skip => (wells, zone),
        },
    );

    let total_production = wells.iter().filter_map(|w| w.total_production).sum();
    let net_diff = wells.iter().filter_map(|w| w.net_diff).sum();
    let total = WellRecord {
        well_name: TOTAL_LABEL.to_string(),
        production_zone: String::new(),
        total_production: Some(total_production),
        net_diff: Some(net_diff),
        water_cut: String::new(),
    };

    ReportResult { wells, total }
}

fn classify(row: &[Data], columns: &ColumnMap, zone: &str) -> RowKind {
    let well_name = cell_display(row.get(columns.well_name));
    let total_blank = columns
        .total_production
        .map_or(true, |col| cell_is_blank(row.get(col)));
    let diff_blank = cell_is_blank(row.get(columns.net_diff));

    if total_blank && diff_blank {
        if well_name.is_empty() {
            return RowKind::Skip;
        }
        return RowKind::ZoneHeader(well_name);
    }

    if well_name.is_empty() || is_footer(&well_name) {
        return RowKind::Skip;
    }

    let Some(net_diff) = cell_to_f64(row.get(columns.net_diff)) else {
        // No recorded difference: the row is not part of the report.
        return RowKind::Skip;
    };

    let explicit_zone = columns
        .production_zone
        .map(|col| cell_display(row.get(col)))
        .unwrap_or_default();
    let production_zone = if explicit_zone.is_empty() {
        zone.to_string()
    } else {
        explicit_zone
    };

    RowKind::Well(WellRecord {
        well_name,
        production_zone,
        total_production: columns
            .total_production
            .and_then(|col| cell_to_f64(row.get(col))),
        net_diff: Some(net_diff),
        water_cut: columns
            .water_cut
            .map(|col| cell_display(row.get(col)))
            .unwrap_or_default(),
    })
}

fn is_footer(well_name: &str) -> bool {
    let lower = well_name.to_lowercase();
    FOOTER_MARKERS.iter().any(|marker| lower.contains(marker))
}

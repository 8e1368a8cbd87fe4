//! Workbook decoding: open, pick the `Report` sheet, materialize the grid.

use std::io::{Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Reader, Sheets};

use crate::report::grid::RawGrid;
use crate::report::ReportError;

/// The report table always lives on a sheet literally named `Report`.
pub const REPORT_SHEET: &str = "Report";

/// Decode a workbook file (`.xlsx` or `.xlsm`) and return the Report sheet
/// as a raw grid.
pub fn load_report_grid(path: impl AsRef<Path>) -> Result<RawGrid, ReportError> {
    let mut workbook = open_workbook_auto(path)?;
    report_grid(&mut workbook)
}

/// Decode a workbook from an in-memory reader (e.g. an uploaded body).
pub fn read_report_grid<RS: Read + Seek + Clone>(reader: RS) -> Result<RawGrid, ReportError> {
    let mut workbook = open_workbook_auto_from_rs(reader)?;
    report_grid(&mut workbook)
}

fn report_grid<RS: Read + Seek>(workbook: &mut Sheets<RS>) -> Result<RawGrid, ReportError> {
    let names = workbook.sheet_names();
    if !names.iter().any(|name| name == REPORT_SHEET) {
        return Err(ReportError::SheetNotFound {
            available: names.to_vec(),
        });
    }
    let range = workbook.worksheet_range(REPORT_SHEET)?;
    Ok(range.rows().map(<[calamine::Data]>::to_vec).collect())
}

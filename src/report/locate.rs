//! Finds the data table inside an unstructured report sheet.
//!
//! Real reports stack a logo/address block of unpredictable height above the
//! table, so the header is found by marker text, not position. Some variants
//! split the header over two rows ("TOTAL PRODUCTION" spanning "Net BO" /
//! "Net diff. BO"); merged parent cells carry their value only in the first
//! column of the span and are carried forward when folding compound labels.

use calamine::Data;

use crate::report::columns::{ColumnRules, Field};
use crate::report::grid::{cell_display, cell_is_blank, cell_to_f64};
use crate::report::ReportError;

/// Case-insensitive substring that marks the header row.
pub const HEADER_MARKER: &str = "running wells";

/// Resolved column positions. `well_name` and `net_diff` are required for a
/// usable report; the rest degrade to blanks in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub well_name: usize,
    pub net_diff: usize,
    pub total_production: Option<usize>,
    pub production_zone: Option<usize>,
    pub water_cut: Option<usize>,
}

/// Where the table sits in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Index of the marker row carrying the column names.
    pub header_row: usize,
    /// First data row: directly below the header, or below the sub-header
    /// when the document uses a two-row header.
    pub data_start: usize,
    /// Compound column labels, one per header column.
    pub labels: Vec<String>,
    pub columns: ColumnMap,
}

impl TableLayout {
    /// Resolved label for a canonical field, when its column matched.
    pub fn label_for(&self, field: Field) -> Option<&str> {
        let index = match field {
            Field::WellName => Some(self.columns.well_name),
            Field::NetDiff => Some(self.columns.net_diff),
            Field::TotalProduction => self.columns.total_production,
            Field::ProductionZone => self.columns.production_zone,
            Field::WaterCut => self.columns.water_cut,
        }?;
        self.labels.get(index).map(String::as_str)
    }
}

/// Locate the table: marker scan, optional sub-header folding, column
/// resolution against the rule table.
pub fn locate(grid: &[Vec<Data>], rules: &ColumnRules) -> Result<TableLayout, ReportError> {
    let header_row = grid
        .iter()
        .position(|row| {
            row.iter()
                .any(|cell| cell_display(Some(cell)).to_lowercase().contains(HEADER_MARKER))
        })
        .ok_or(ReportError::TableNotFound)?;

    let header = &grid[header_row];
    let sub_header = grid.get(header_row + 1).filter(|row| is_sub_header(row));
    let labels = compound_labels(header, sub_header.map(Vec::as_slice));
    let data_start = header_row + 1 + usize::from(sub_header.is_some());

    let find = |field: Field| {
        labels
            .iter()
            .position(|label| rules.label_matches(field, label))
    };

    let well_name = find(Field::WellName).ok_or_else(|| ReportError::RequiredColumnMissing {
        field: Field::WellName,
        detected: labels.clone(),
    })?;
    let net_diff = find(Field::NetDiff).ok_or_else(|| ReportError::RequiredColumnMissing {
        field: Field::NetDiff,
        detected: labels.clone(),
    })?;

    let columns = ColumnMap {
        well_name,
        net_diff,
        total_production: find(Field::TotalProduction),
        production_zone: find(Field::ProductionZone),
        water_cut: find(Field::WaterCut),
    };

    Ok(TableLayout {
        header_row,
        data_start,
        labels,
        columns,
    })
}

/// The row under the header is a sub-header when it carries at least two
/// non-blank cells and no numeric cells. Single-cell rows stay untouched so
/// a zone header directly below the table header is never consumed.
fn is_sub_header(row: &[Data]) -> bool {
    let non_blank = row.iter().filter(|cell| !cell_is_blank(Some(cell))).count();
    let numeric = row.iter().any(|cell| cell_to_f64(Some(cell)).is_some());
    non_blank >= 2 && !numeric
}

/// Fold header and sub-header into one label per column. The parent value is
/// carried forward across its merged span; a column without a sub label
/// keeps the parent cell alone (no carry, to avoid inheriting a neighbour's
/// name).
fn compound_labels(header: &[Data], sub_header: Option<&[Data]>) -> Vec<String> {
    let width = header
        .len()
        .max(sub_header.map_or(0, <[Data]>::len));

    let mut carried = String::new();
    (0..width)
        .map(|col| {
            let parent = cell_display(header.get(col));
            if !parent.is_empty() {
                carried = parent.clone();
            }
            let sub = cell_display(sub_header.and_then(|row| row.get(col)));
            if sub.is_empty() {
                parent
            } else if carried.is_empty() {
                sub
            } else {
                format!("{carried} {sub}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use calamine::Data;

    use crate::report::columns::{ColumnRules, Field};
    use crate::report::ReportError;

    use super::{locate, HEADER_MARKER};

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    fn single_header_grid() -> Vec<Vec<Data>> {
        vec![
            vec![text("NORPETCO"), Data::Empty],
            vec![text("Western Desert Operations")],
            vec![text("Date: 2024-05-01")],
            vec![text("RUNNING WELLS"), text("Net BO"), text("Net diff. BO"), text("W/C")],
            vec![text("W-1"), Data::Float(100.0), Data::Float(10.0), text("35%")],
        ]
    }

    #[test]
    fn header_found_at_marker_row() {
        let layout = locate(&single_header_grid(), &ColumnRules::builtin()).expect("table");
        assert_eq!(layout.header_row, 3);
        assert_eq!(layout.data_start, 4);
        assert_eq!(layout.columns.well_name, 0);
        assert_eq!(layout.columns.total_production, Some(1));
        assert_eq!(layout.columns.net_diff, 2);
        assert_eq!(layout.columns.water_cut, Some(3));
        assert_eq!(layout.columns.production_zone, None);
    }

    #[test]
    fn marker_is_case_insensitive() {
        let mut grid = single_header_grid();
        grid[3][0] = text("Running Wells");
        let layout = locate(&grid, &ColumnRules::builtin()).expect("table");
        assert_eq!(layout.header_row, 3);
    }

    #[test]
    fn missing_marker_is_table_not_found() {
        let grid = vec![
            vec![text("NORPETCO")],
            vec![text("no table here")],
        ];
        let err = locate(&grid, &ColumnRules::builtin()).unwrap_err();
        assert!(matches!(err, ReportError::TableNotFound));
        assert!(err.to_string().to_lowercase().contains(HEADER_MARKER));
    }

    #[test]
    fn missing_required_column_lists_detected_labels() {
        let grid = vec![vec![
            text("RUNNING WELLS"),
            text("Gross BO"),
            text("W/C"),
        ]];
        let err = locate(&grid, &ColumnRules::builtin()).unwrap_err();
        match err {
            ReportError::RequiredColumnMissing { field, detected } => {
                assert_eq!(field, Field::NetDiff);
                assert_eq!(detected, vec!["RUNNING WELLS", "Gross BO", "W/C"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn two_row_header_folds_merged_parent_into_compound_labels() {
        let grid = vec![
            vec![
                text("RUNNING WELLS"),
                text("TOTAL PRODUCTION"),
                Data::Empty,
                text("W/C"),
            ],
            vec![Data::Empty, text("Net BO"), text("Net diff. BO"), Data::Empty],
            vec![text("W-1"), Data::Float(100.0), Data::Float(10.0), text("35%")],
        ];
        let layout = locate(&grid, &ColumnRules::builtin()).expect("table");
        assert_eq!(layout.header_row, 0);
        assert_eq!(layout.data_start, 2);
        assert_eq!(layout.labels[1], "TOTAL PRODUCTION Net BO");
        assert_eq!(layout.labels[2], "TOTAL PRODUCTION Net diff. BO");
        assert_eq!(layout.columns.total_production, Some(1));
        assert_eq!(layout.columns.net_diff, 2);
        assert_eq!(layout.label_for(Field::NetDiff), Some("TOTAL PRODUCTION Net diff. BO"));
    }

    #[test]
    fn zone_header_below_header_row_is_not_treated_as_sub_header() {
        let grid = vec![
            vec![text("RUNNING WELLS"), text("Net BO"), text("Net diff. BO")],
            vec![text("Ferdaus"), Data::Empty, Data::Empty],
            vec![text("W-1"), Data::Float(100.0), Data::Float(10.0)],
        ];
        let layout = locate(&grid, &ColumnRules::builtin()).expect("table");
        assert_eq!(layout.data_start, 1);
    }

    #[test]
    fn first_matching_column_wins_left_to_right() {
        let grid = vec![vec![
            text("RUNNING WELLS"),
            text("Well Code"),
            text("Net diff. BO"),
        ]];
        let layout = locate(&grid, &ColumnRules::builtin()).expect("table");
        assert_eq!(layout.columns.well_name, 0);
    }
}

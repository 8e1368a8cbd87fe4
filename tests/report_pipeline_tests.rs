//! End-to-end fixtures through locate + normalize, including the messy
//! realistic document shape: logo block, two-row header, zone groups,
//! error markers, source footers.

use calamine::{CellErrorType, Data};

use wellreport::report::{summarize_grid, ColumnRules, Field, ReportError, TOTAL_LABEL};

fn text(value: &str) -> Data {
    Data::String(value.to_string())
}

fn num(value: f64) -> Data {
    Data::Float(value)
}

/// A grid shaped like a real daily report: decorative block, merged two-row
/// header, two zones, a well without a recorded difference, an error marker,
/// and a pre-existing footer.
fn realistic_grid() -> Vec<Vec<Data>> {
    vec![
        vec![text("NORPETCO"), Data::Empty, Data::Empty, Data::Empty, Data::Empty],
        vec![text("Western Desert — Daily Production Report")],
        vec![Data::Empty],
        vec![text("Date: 2024-05-01"), text("From: Field Office")],
        vec![
            text("RUNNING WELLS"),
            text("TOTAL PRODUCTION"),
            Data::Empty,
            text("W/C"),
            text("Remarks"),
        ],
        vec![
            Data::Empty,
            text("Net BO"),
            text("Net diff. BO"),
            Data::Empty,
            Data::Empty,
        ],
        vec![text("Ferdaus"), Data::Empty, Data::Empty, Data::Empty, Data::Empty],
        vec![text("W-1"), num(1250.0), num(10.0), text("35%"), text("ok")],
        vec![text("W-2"), num(800.0), num(-5.0), text("41%"), Data::Empty],
        vec![text("W-3"), num(400.0), Data::Empty, text("12%"), text("pump down")],
        vec![text("Safir"), Data::Empty, Data::Empty, Data::Empty, Data::Empty],
        vec![
            text("S-1"),
            num(300.0),
            Data::Error(CellErrorType::Div0),
            text("8%"),
            Data::Empty,
        ],
        vec![text("S-2"), num(150.0), num(2.5), text("19%"), Data::Empty],
        vec![text("TOTAL"), num(2900.0), num(7.5), Data::Empty, Data::Empty],
        vec![text("CUM. PROD."), num(91000.0), Data::Empty, Data::Empty, Data::Empty],
    ]
}

#[test]
fn realistic_document_summarizes_to_gated_wells_plus_total() {
    let summary =
        summarize_grid("fixture", &realistic_grid(), &ColumnRules::builtin()).expect("summary");

    assert_eq!(summary.header_row, 4);

    let names: Vec<&str> = summary.wells.iter().map(|w| w.well_name.as_str()).collect();
    assert_eq!(names, ["W-1", "W-2", "S-2"]);

    assert_eq!(summary.wells[0].production_zone, "Ferdaus");
    assert_eq!(summary.wells[1].production_zone, "Ferdaus");
    assert_eq!(summary.wells[2].production_zone, "Safir");

    assert_eq!(summary.total.well_name, TOTAL_LABEL);
    assert_eq!(summary.total.total_production, Some(2200.0));
    assert_eq!(summary.total.net_diff, Some(7.5));
}

#[test]
fn detected_columns_echo_compound_labels() {
    let summary =
        summarize_grid("fixture", &realistic_grid(), &ColumnRules::builtin()).expect("summary");

    assert_eq!(summary.columns.well_name, "RUNNING WELLS");
    assert_eq!(
        summary.columns.total_production.as_deref(),
        Some("TOTAL PRODUCTION Net BO")
    );
    assert_eq!(summary.columns.net_diff, "TOTAL PRODUCTION Net diff. BO");
    assert_eq!(summary.columns.water_cut.as_deref(), Some("W/C"));
    assert_eq!(summary.columns.production_zone, None);
}

#[test]
fn total_equals_sum_of_emitted_net_diffs() {
    let summary =
        summarize_grid("fixture", &realistic_grid(), &ColumnRules::builtin()).expect("summary");

    let sum: f64 = summary
        .wells
        .iter()
        .filter(|w| w.well_name != TOTAL_LABEL)
        .filter_map(|w| w.net_diff)
        .sum();
    assert_eq!(summary.total.net_diff, Some(sum));
}

#[test]
fn document_without_marker_fails_with_table_not_found() {
    let grid = vec![
        vec![text("NORPETCO")],
        vec![text("Just an address block")],
    ];
    let err = summarize_grid("fixture", &grid, &ColumnRules::builtin()).unwrap_err();
    assert!(matches!(err, ReportError::TableNotFound));
}

#[test]
fn missing_net_diff_column_reports_every_detected_label() {
    let grid = vec![vec![text("RUNNING WELLS"), text("Gross BO"), text("Remarks")]];
    let err = summarize_grid("fixture", &grid, &ColumnRules::builtin()).unwrap_err();
    match err {
        ReportError::RequiredColumnMissing { field, detected } => {
            assert_eq!(field, Field::NetDiff);
            assert_eq!(detected.len(), 3);
            assert!(detected.contains(&"Gross BO".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn summary_serializes_with_wells_and_total() {
    let summary =
        summarize_grid("fixture", &realistic_grid(), &ColumnRules::builtin()).expect("summary");
    let payload = serde_json::to_value(&summary).expect("summary should serialize");

    assert_eq!(payload["source"], "fixture");
    assert_eq!(payload["wells"].as_array().map(Vec::len), Some(3));
    assert_eq!(payload["total"]["well_name"], "TOTAL");
    assert_eq!(payload["columns"]["well_name"], "RUNNING WELLS");
}

//! CSV export of a summary, TOTAL row last. Numbers stay raw; absent values
//! become empty cells.

use std::io::Write;

use crate::report::normalize::WellRecord;
use crate::report::ReportSummary;

const CSV_HEADINGS: [&str; 5] = [
    "Well Name",
    "Production Zone",
    "TOTAL PRODUCTION",
    "NET DIFF",
    "W/C",
];

pub fn write_csv<W: Write>(summary: &ReportSummary, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADINGS)?;
    for record in &summary.wells {
        write_record(&mut csv_writer, record)?;
    }
    write_record(&mut csv_writer, &summary.total)?;
    csv_writer.flush()?;
    Ok(())
}

fn write_record<W: Write>(
    writer: &mut csv::Writer<W>,
    record: &WellRecord,
) -> Result<(), csv::Error> {
    let number = |value: Option<f64>| value.map(|v| format!("{v}")).unwrap_or_default();
    let total_production = number(record.total_production);
    let net_diff = number(record.net_diff);
    writer.write_record([
        record.well_name.as_str(),
        record.production_zone.as_str(),
        total_production.as_str(),
        net_diff.as_str(),
        record.water_cut.as_str(),
    ])
}

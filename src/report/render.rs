//! Text rendering of a summary: thousands-grouped integers, signed net
//! difference, aligned columns, TOTAL row separated at the bottom.

use std::fmt::Write as _;

use crate::report::normalize::WellRecord;
use crate::report::ReportSummary;

const HEADINGS: [&str; 5] = [
    "Well Name",
    "Production Zone",
    "TOTAL PRODUCTION",
    "NET DIFF",
    "W/C",
];

/// Round and group an absolute count: `12345.4` -> `"12,345"`.
pub fn format_count(value: f64) -> String {
    group_digits(value.round() as i64)
}

/// Round, group, and always carry a sign: `10.0` -> `"+10"`, `0.0` -> `"+0"`.
pub fn format_signed(value: f64) -> String {
    let rounded = value.round() as i64;
    if rounded < 0 {
        group_digits(rounded)
    } else {
        format!("+{}", group_digits(rounded))
    }
}

fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

fn record_cells(record: &WellRecord) -> [String; 5] {
    [
        record.well_name.clone(),
        record.production_zone.clone(),
        record.total_production.map(format_count).unwrap_or_default(),
        record.net_diff.map(format_signed).unwrap_or_default(),
        record.water_cut.clone(),
    ]
}

/// Render the whole summary as an aligned text table, TOTAL row last behind
/// a separator.
pub fn render_text_table(summary: &ReportSummary) -> String {
    let mut rows: Vec<[String; 5]> = summary.wells.iter().map(record_cells).collect();
    rows.push(record_cells(&summary.total));

    let mut widths: [usize; 5] = HEADINGS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADINGS.map(str::to_string), &widths);
    write_separator(&mut out, &widths);
    let well_rows = rows.len() - 1;
    for (index, row) in rows.iter().enumerate() {
        if index == well_rows {
            write_separator(&mut out, &widths);
        }
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    for (index, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if index > 0 {
            out.push_str("  ");
        }
        // Numeric columns right-aligned, text columns left-aligned.
        if index == 2 || index == 3 {
            let _ = write!(out, "{cell:>width$}");
        } else {
            let _ = write!(out, "{cell:<width$}");
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

fn write_separator(out: &mut String, widths: &[usize; 5]) {
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
}

//! Raw cell grid and cell coercion helpers shared by the locator and normalizer.

use calamine::Data;

/// Decoded sheet contents: rows of cells, no assumed types. Merged regions
/// carry their value only in the first cell of the span.
pub type RawGrid = Vec<Vec<Data>>;

/// Display text for a cell, trimmed. Numbers render without formatting,
/// everything unrepresentable falls back to its debug form.
pub fn cell_display(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.trim().to_string(),
        Some(Data::Float(f)) => format!("{f}"),
        Some(Data::Int(i)) => format!("{i}"),
        Some(Data::Bool(b)) => format!("{b}"),
        Some(other) => format!("{other:?}"),
    }
}

/// A cell is blank when it is missing, `Empty`, or whitespace-only text.
/// Error markers are not blank: they are present-but-unparsable values.
pub fn cell_is_blank(cell: Option<&Data>) -> bool {
    match cell {
        None | Some(Data::Empty) => true,
        Some(Data::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

/// Numeric value of a cell, or `None` for anything that does not parse:
/// blanks, text, booleans, and spreadsheet error markers all become absent.
/// Thousands separators in text cells are stripped before parsing.
pub fn cell_to_f64(cell: Option<&Data>) -> Option<f64> {
    match cell {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        Some(Data::String(s)) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    }
}

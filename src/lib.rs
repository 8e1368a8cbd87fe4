//! wellreport: summarize spreadsheet-based production reports into a fixed
//! well/zone/production schema with a computed TOTAL row.

pub mod cli;
pub mod report;
pub mod server;

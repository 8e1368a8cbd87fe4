//! Command dispatch for the `wellreport` binary.

use std::env;
use std::fs;
use std::path::Path;

use crate::report::{export, render, summarize_workbook, ColumnRules, DEFAULT_COLUMN_RULES_PATH};
use crate::server;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Summarize,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("summarize") => Some(Command::Summarize),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Summarize) => handle_summarize(args),
        None => {
            eprintln!("usage: wellreport <serve|summarize>");
            2
        }
    }
}

fn handle_serve() -> i32 {
    let bind_addr = env::var("WELLREPORT_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    match server::run_server(&bind_addr) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_summarize(args: &[String]) -> i32 {
    let Some(workbook_path) = args.get(2).filter(|arg| !arg.starts_with("--")) else {
        eprintln!("usage: wellreport summarize <workbook.xlsx|.xlsm> [--table] [--csv <path>]");
        return 2;
    };

    let as_table = args.iter().any(|arg| arg == "--table");
    let csv_path = args
        .iter()
        .position(|arg| arg == "--csv")
        .and_then(|index| args.get(index + 1));

    let rules = ColumnRules::load(DEFAULT_COLUMN_RULES_PATH);
    let summary = match summarize_workbook(Path::new(workbook_path), &rules) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("summarize failed: {err}");
            return 1;
        }
    };

    if let Some(csv_path) = csv_path {
        let file = match fs::File::create(csv_path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("could not create '{csv_path}': {err}");
                return 1;
            }
        };
        if let Err(err) = export::write_csv(&summary, file) {
            eprintln!("csv export failed: {err}");
            return 1;
        }
        println!("wrote {csv_path}");
    }

    if as_table {
        print!("{}", render::render_text_table(&summary));
    } else {
        match serde_json::to_string_pretty(&summary) {
            Ok(payload) => println!("{payload}"),
            Err(err) => {
                eprintln!("failed to serialize summary: {err}");
                return 1;
            }
        }
    }

    0
}

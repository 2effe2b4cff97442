//! Interactive console for the department salary summary report.
//!
//! Loads the roster once at startup, aggregates it, then serves a blocking
//! menu loop on stdin:
//!
//! - `1` - print every department name, one per line
//! - `2` - print the summary table
//! - `3` - write the CSV export, overwriting any previous one
//! - anything else (or end of input) - exit
//!
//! A fatal error prints a diagnostic to stderr and exits with code 1.

use std::io::{self, BufRead, Write};
use std::process;

use tracing_subscriber::EnvFilter;

use corp_summary::aggregation::summarize_departments;
use corp_summary::config::ReportConfig;
use corp_summary::error::{ReportError, ReportResult};
use corp_summary::report::{console, csv};
use corp_summary::roster::load_roster;

/// Fixed name of the optional configuration file in the working directory.
const CONFIG_FILE: &str = "report_config.yaml";

const MENU: &str = "Choose action:\n\
                    1 - print departments\n\
                    2 - summary report console print\n\
                    3 - save summary report\n";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> ReportResult<()> {
    let config = ReportConfig::load_or_default(CONFIG_FILE)?;

    let roster = load_roster(&config.input_path, config.delimiter)?;
    let summaries = summarize_departments(&roster);

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("{}", MENU);
        let _ = io::stdout().flush();

        input.clear();
        let bytes_read = stdin
            .lock()
            .read_line(&mut input)
            .map_err(|e| ReportError::InputRead {
                path: "stdin".to_string(),
                message: e.to_string(),
            })?;
        if bytes_read == 0 {
            // Input stream closed; treated as loop termination.
            break;
        }

        // Only the line terminator is stripped; any other surrounding
        // whitespace makes the input unrecognized and ends the loop.
        let action = input.trim_end_matches(['\r', '\n']);

        match action {
            "1" => {
                for summary in &summaries {
                    println!("{}", summary.name);
                }
            }
            "2" => print!("{}", console::render_table(&summaries)),
            "3" => csv::export(&summaries, &config.output_path)?,
            _ => break,
        }
    }

    Ok(())
}

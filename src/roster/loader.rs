//! Roster loading functionality.
//!
//! This module reads a roster file into an ordered sequence of employee
//! records, applying the record parser to every line after the header.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::models::Employee;

use super::parser::parse_record;

/// Loads an employee roster from a delimiter-separated file.
///
/// The first line of the file is discarded as a header (it is not
/// validated); every subsequent line is parsed into an [`Employee`]. The
/// resulting roster preserves file order. A file containing only the header
/// (or nothing at all) yields an empty roster.
///
/// Loading is all-or-nothing: the first malformed line aborts the load and
/// no partial roster is returned. The file handle is scoped to this call
/// and released on every path.
///
/// # Arguments
///
/// * `path` - Path to the roster file
/// * `delimiter` - The field delimiter used in the file
///
/// # Returns
///
/// Returns the roster in file order, or an error if:
/// - The file does not exist (`InputNotFound`)
/// - The file cannot be read (`InputRead`)
/// - Any line fails record parsing (`FieldCount`, `InvalidNumber`)
///
/// # Example
///
/// ```no_run
/// use corp_summary::roster::load_roster;
///
/// let roster = load_roster("Corp_Summary.csv", ';')?;
/// println!("{} employees", roster.len());
/// # Ok::<(), corp_summary::error::ReportError>(())
/// ```
pub fn load_roster<P: AsRef<Path>>(path: P, delimiter: char) -> ReportResult<Vec<Employee>> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let file = File::open(path).map_err(|e| open_error(&path_str, &e))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    // Header line, skipped unvalidated. A read error here still surfaces.
    if let Some(Err(e)) = lines.next() {
        return Err(read_error(&path_str, &e));
    }

    let mut employees = Vec::new();
    for (index, line) in lines.enumerate() {
        let line = line.map_err(|e| read_error(&path_str, &e))?;
        // 1-based file position: the header was line 1.
        let line_number = index + 2;
        employees.push(parse_record(&line, delimiter, line_number)?);
    }

    info!(path = %path_str, count = employees.len(), "Loaded roster");

    Ok(employees)
}

fn open_error(path: &str, e: &io::Error) -> ReportError {
    if e.kind() == io::ErrorKind::NotFound {
        ReportError::InputNotFound {
            path: path.to_string(),
        }
    } else {
        read_error(path, e)
    }
}

fn read_error(path: &str, e: &io::Error) -> ReportError {
    ReportError::InputRead {
        path: path.to_string(),
        message: e.to_string(),
    }
}

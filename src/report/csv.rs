//! CSV export of the summary report.
//!
//! This module renders department summaries as `;`-delimited text and
//! writes them to the report file, overwriting any previous export.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ReportError, ReportResult};
use crate::models::DepartmentSummary;

/// The field delimiter of the exported report.
///
/// The export format is a compatibility contract, so the delimiter is fixed
/// rather than tied to the input delimiter.
pub const EXPORT_DELIMITER: char = ';';

// Historical header label, kept misspelled so existing consumers of the
// report file keep matching it.
const HEADER_COLUMNS: [&str; 4] = ["Deportment", "Size", "Fork", "Avg salary"];

/// Renders department summaries as `;`-delimited report text.
///
/// The first line is the header row; each following line holds one
/// department as `name;size;min-max;avg`, in aggregator order. The output
/// always ends with a newline after the last row.
///
/// # Examples
///
/// ```
/// use corp_summary::models::DepartmentSummary;
/// use corp_summary::report::csv::render;
/// use rust_decimal::Decimal;
///
/// let summaries = vec![DepartmentSummary {
///     name: "Sales".to_string(),
///     size: 2,
///     min_salary: 100,
///     max_salary: 200,
///     avg_salary: Decimal::from(150),
/// }];
///
/// assert_eq!(
///     render(&summaries),
///     "Deportment;Size;Fork;Avg salary\nSales;2;100-200;150\n"
/// );
/// ```
pub fn render(summaries: &[DepartmentSummary]) -> String {
    let mut out = String::new();

    let header = HEADER_COLUMNS.join(&EXPORT_DELIMITER.to_string());
    let _ = writeln!(out, "{}", header);

    for summary in summaries {
        let _ = writeln!(
            out,
            "{name}{d}{size}{d}{fork}{d}{avg}",
            name = summary.name,
            size = summary.size,
            fork = summary.fork(),
            avg = summary.avg_salary,
            d = EXPORT_DELIMITER,
        );
    }

    out
}

/// Writes the summary report to `path`, replacing any previous export.
///
/// The target file is created if missing and truncated if present; there is
/// no append mode and no versioning. The write handle is scoped to this
/// call and released on every path.
///
/// # Arguments
///
/// * `summaries` - The department summaries, in aggregator order
/// * `path` - Destination of the report file
///
/// # Returns
///
/// Returns `ExportFailed` if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use corp_summary::report::csv::export;
///
/// export(&[], "summary_report.csv")?;
/// # Ok::<(), corp_summary::error::ReportError>(())
/// ```
pub fn export<P: AsRef<Path>>(summaries: &[DepartmentSummary], path: P) -> ReportResult<()> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    fs::write(path, render(summaries)).map_err(|e| ReportError::ExportFailed {
        path: path_str.clone(),
        message: e.to_string(),
    })?;

    info!(path = %path_str, departments = summaries.len(), "Exported summary report");

    Ok(())
}

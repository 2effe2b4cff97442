//! Record parsing functionality.
//!
//! This module provides the function that converts one raw roster line into
//! a structured employee record.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{ReportError, ReportResult};
use crate::models::Employee;

/// The number of fields a roster record must have.
pub const RECORD_FIELD_COUNT: usize = 6;

/// Parses one roster line into an employee record.
///
/// The line must split on `delimiter` into exactly six fields in fixed
/// order: full name, department, division, position, score, salary. The
/// field count is validated before any conversion so a short or long line
/// reports the count mismatch rather than a conversion failure.
///
/// Text fields are taken verbatim. The numeric fields are trimmed of
/// surrounding whitespace before conversion, so a trailing carriage return
/// or padding around a number does not fail the record.
///
/// # Arguments
///
/// * `line` - The roster line, without its trailing newline
/// * `delimiter` - The field delimiter to split on
/// * `line_number` - The 1-based line number in the source file, used in
///   error diagnostics
///
/// # Returns
///
/// Returns the parsed [`Employee`], or an error if:
/// - The line does not split into exactly six fields (`FieldCount`)
/// - The score is not a valid decimal number (`InvalidNumber`)
/// - The salary is not a valid integer (`InvalidNumber`)
///
/// # Examples
///
/// ```
/// use corp_summary::roster::parse_record;
///
/// let employee = parse_record("Ada Lovelace;Engineering;Compute;Analyst;4.7;120", ';', 2)?;
/// assert_eq!(employee.department, "Engineering");
/// assert_eq!(employee.salary, 120);
/// # Ok::<(), corp_summary::error::ReportError>(())
/// ```
pub fn parse_record(line: &str, delimiter: char, line_number: usize) -> ReportResult<Employee> {
    let fields: Vec<&str> = line.split(delimiter).collect();

    if fields.len() != RECORD_FIELD_COUNT {
        return Err(ReportError::FieldCount {
            line: line_number,
            expected: RECORD_FIELD_COUNT,
            found: fields.len(),
        });
    }

    let score_text = fields[4].trim();
    let score = Decimal::from_str(score_text).map_err(|_| ReportError::InvalidNumber {
        line: line_number,
        field: "score".to_string(),
        value: score_text.to_string(),
    })?;

    let salary_text = fields[5].trim();
    let salary: i64 = salary_text.parse().map_err(|_| ReportError::InvalidNumber {
        line: line_number,
        field: "salary".to_string(),
        value: salary_text.to_string(),
    })?;

    Ok(Employee {
        full_name: fields[0].to_string(),
        department: fields[1].to_string(),
        division: fields[2].to_string(),
        position: fields[3].to_string(),
        score,
        salary,
    })
}

//! Console rendering of the summary report.
//!
//! This module renders department summaries as a fixed-width, right-aligned
//! text table. It only builds the string; printing is the caller's concern.

use std::fmt::Write;

use crate::models::DepartmentSummary;

const NAME_WIDTH: usize = 30;
const SIZE_WIDTH: usize = 8;
const FORK_WIDTH: usize = 17;
const AVG_WIDTH: usize = 14;

/// Renders department summaries as an aligned console table.
///
/// The table starts with a header row (Department, Size, Fork, Avg salary)
/// followed by one right-aligned row per department in aggregator order.
/// The Fork column shows the salary range as a `min-max` token. With no
/// summaries, only the header row is produced.
///
/// # Examples
///
/// ```
/// use corp_summary::models::DepartmentSummary;
/// use corp_summary::report::console::render_table;
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
/// let table = render_table(&summaries);
/// assert!(table.lines().next().unwrap().contains("Department"));
/// assert!(table.contains("100-200"));
/// ```
pub fn render_table(summaries: &[DepartmentSummary]) -> String {
    let mut table = String::new();

    let _ = writeln!(
        table,
        "{:>NAME_WIDTH$} {:>SIZE_WIDTH$} {:>FORK_WIDTH$} {:>AVG_WIDTH$}",
        "Department", "Size", "Fork", "Avg salary",
    );

    for summary in summaries {
        let _ = writeln!(
            table,
            "{:>NAME_WIDTH$} {:>SIZE_WIDTH$} {:>FORK_WIDTH$} {:>AVG_WIDTH$}",
            summary.name,
            summary.size,
            summary.fork(),
            summary.avg_salary,
        );
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn summary(name: &str, size: usize, min: i64, max: i64, avg: &str) -> DepartmentSummary {
        DepartmentSummary {
            name: name.to_string(),
            size,
            min_salary: min,
            max_salary: max,
            avg_salary: Decimal::from_str(avg).unwrap(),
        }
    }

    #[test]
    fn test_header_row_labels() {
        let table = render_table(&[]);
        let header = table.lines().next().unwrap();

        assert!(header.contains("Department"));
        assert!(header.contains("Size"));
        assert!(header.contains("Fork"));
        assert!(header.contains("Avg salary"));
    }

    #[test]
    fn test_empty_summaries_render_header_only() {
        let table = render_table(&[]);

        assert_eq!(table.lines().count(), 1);
    }

    #[test]
    fn test_one_row_per_department_in_order() {
        let summaries = vec![
            summary("Sales", 2, 100, 200, "150"),
            summary("IT", 1, 300, 300, "300"),
        ];

        let table = render_table(&summaries);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Sales"));
        assert!(lines[2].contains("IT"));
    }

    #[test]
    fn test_row_contains_fork_token_and_average() {
        let summaries = vec![summary("Sales", 2, 100, 200, "150.5")];

        let table = render_table(&summaries);
        let row = table.lines().nth(1).unwrap();

        assert!(row.contains("100-200"));
        assert!(row.contains("150.5"));
    }

    #[test]
    fn test_rows_are_right_aligned() {
        let summaries = vec![summary("IT", 1, 300, 300, "300")];

        let table = render_table(&summaries);
        let row = table.lines().nth(1).unwrap();

        assert!(row.starts_with(' '));
        assert!(row.ends_with("300"));
    }
}

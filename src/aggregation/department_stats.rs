//! Department statistics functionality.
//!
//! This module reduces one department group to its summary statistics and
//! composes grouping with that reduction to summarize a whole roster.

use rust_decimal::Decimal;

use crate::models::{DepartmentSummary, Employee};

use super::grouping::group_by_department;

/// Number of decimal places the average salary is rounded to.
const AVG_SALARY_SCALE: u32 = 3;

/// Computes the summary statistics for one department group.
///
/// Count is the group size; minimum and maximum salary come from a linear
/// scan (ties between records are irrelevant, the extremes are value-based);
/// the average is `sum / count` rounded to 3 decimal places using
/// round-half-to-even (banker's rounding, the `Decimal::round_dp` default).
///
/// A zero-size group yields an average of 0 instead of dividing by zero,
/// with minimum and maximum also 0. Groups built by
/// [`group_by_department`] always hold at least one record, so the guard is
/// defensive only.
///
/// # Arguments
///
/// * `name` - The department name
/// * `employees` - The department's employees, in roster order
///
/// # Examples
///
/// ```
/// use corp_summary::aggregation::compute_department_stats;
/// use corp_summary::roster::parse_record;
/// use rust_decimal::Decimal;
///
/// let ada = parse_record("Ada;Sales;;Rep;5;100", ';', 2)?;
/// let bob = parse_record("Bob;Sales;;Rep;4;200", ';', 3)?;
///
/// let summary = compute_department_stats("Sales", &[&ada, &bob]);
/// assert_eq!(summary.size, 2);
/// assert_eq!(summary.min_salary, 100);
/// assert_eq!(summary.max_salary, 200);
/// assert_eq!(summary.avg_salary, Decimal::from(150));
/// # Ok::<(), corp_summary::error::ReportError>(())
/// ```
pub fn compute_department_stats(name: &str, employees: &[&Employee]) -> DepartmentSummary {
    let size = employees.len();
    let min_salary = employees.iter().map(|e| e.salary).min().unwrap_or(0);
    let max_salary = employees.iter().map(|e| e.salary).max().unwrap_or(0);

    let avg_salary = if size == 0 {
        Decimal::ZERO
    } else {
        let total: i64 = employees.iter().map(|e| e.salary).sum();
        (Decimal::from(total) / Decimal::from(size as u64)).round_dp(AVG_SALARY_SCALE)
    };

    DepartmentSummary {
        name: name.to_string(),
        size,
        min_salary,
        max_salary,
        avg_salary,
    }
}

/// Summarizes a roster into per-department statistics.
///
/// Groups the roster by department in a single scan, then reduces each
/// group with [`compute_department_stats`]. The result holds exactly one
/// summary per distinct department value in the roster, ordered by first
/// appearance. This is a pure function of the roster: the same input always
/// produces the same summaries.
///
/// # Arguments
///
/// * `roster` - The roster records, in file order
///
/// # Examples
///
/// ```
/// use corp_summary::aggregation::summarize_departments;
/// use corp_summary::roster::parse_record;
///
/// let roster = vec![
///     parse_record("Ada;Sales;;Rep;5;100", ';', 2)?,
///     parse_record("Bob;IT;;Admin;4;300", ';', 3)?,
/// ];
///
/// let summaries = summarize_departments(&roster);
/// assert_eq!(summaries.len(), 2);
/// assert_eq!(summaries[0].name, "Sales");
/// assert_eq!(summaries[1].name, "IT");
/// # Ok::<(), corp_summary::error::ReportError>(())
/// ```
pub fn summarize_departments(roster: &[Employee]) -> Vec<DepartmentSummary> {
    group_by_department(roster)
        .iter()
        .map(|(name, members)| compute_department_stats(name, members))
        .collect()
}

//! Department summary model.
//!
//! This module defines the DepartmentSummary struct holding the aggregated
//! salary statistics for one department.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated salary statistics for one department.
///
/// Summaries are computed once from a roster and are immutable afterwards.
/// Within a report, department names are unique and summaries are ordered by
/// the first appearance of each department in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// The department name.
    pub name: String,
    /// The number of employees in the department.
    pub size: usize,
    /// The lowest salary in the department.
    pub min_salary: i64,
    /// The highest salary in the department.
    pub max_salary: i64,
    /// The average salary, rounded to 3 decimal places.
    pub avg_salary: Decimal,
}

impl DepartmentSummary {
    /// Renders the salary range as a single `min-max` token.
    ///
    /// Both report renderers display the range in this form, under the
    /// "Fork" column label.
    ///
    /// # Examples
    ///
    /// ```
    /// use corp_summary::models::DepartmentSummary;
    /// use rust_decimal::Decimal;
    ///
    /// let summary = DepartmentSummary {
    ///     name: "Sales".to_string(),
    ///     size: 2,
    ///     min_salary: 100,
    ///     max_salary: 200,
    ///     avg_salary: Decimal::from(150),
    /// };
    /// assert_eq!(summary.fork(), "100-200");
    /// ```
    pub fn fork(&self) -> String {
        format!("{}-{}", self.min_salary, self.max_salary)
    }
}

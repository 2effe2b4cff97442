//! Department aggregation for the summary report pipeline.
//!
//! This module reduces a roster to per-department salary statistics:
//! grouping collects employees by department in first-seen order, and the
//! statistics pass turns each group into a
//! [`DepartmentSummary`](crate::models::DepartmentSummary).

mod department_stats;
mod grouping;

pub use department_stats::{compute_department_stats, summarize_departments};
pub use grouping::{DepartmentGroups, group_by_department};

//! Department grouping functionality.
//!
//! This module groups roster records by department name. Iteration order is
//! the order in which each distinct department was first encountered while
//! scanning the roster, not a sorted order.

use std::collections::HashMap;

use crate::models::Employee;

/// An insertion-ordered mapping from department name to its employees.
///
/// Groups iterate in first-seen order regardless of how the backing lookup
/// table hashes keys, and employees within a group keep their roster order.
#[derive(Debug, Default)]
pub struct DepartmentGroups<'a> {
    // Lookup by name; values index into `groups`.
    index: HashMap<&'a str, usize>,
    groups: Vec<(&'a str, Vec<&'a Employee>)>,
}

impl<'a> DepartmentGroups<'a> {
    /// Adds an employee to its department group, creating the group at the
    /// end of the order if the department has not been seen yet.
    fn push(&mut self, employee: &'a Employee) {
        let department = employee.department.as_str();
        match self.index.get(department) {
            Some(&position) => self.groups[position].1.push(employee),
            None => {
                self.index.insert(department, self.groups.len());
                self.groups.push((department, vec![employee]));
            }
        }
    }

    /// Iterates over the groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a Employee])> {
        self.groups
            .iter()
            .map(|(name, members)| (*name, members.as_slice()))
    }

    /// Returns the number of distinct departments.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if the roster contained no records.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Groups a roster by department name in a single scan.
///
/// # Arguments
///
/// * `roster` - The roster records, in file order
///
/// # Returns
///
/// Returns the groups in first-seen department order. Every roster record
/// appears in exactly one group, so group sizes sum to the roster length.
///
/// # Examples
///
/// ```
/// use corp_summary::aggregation::group_by_department;
/// use corp_summary::roster::parse_record;
///
/// let roster = vec![
///     parse_record("Ada;Sales;;Rep;5;100", ';', 2)?,
///     parse_record("Bob;IT;;Admin;4;200", ';', 3)?,
///     parse_record("Cid;Sales;;Rep;3;300", ';', 4)?,
/// ];
///
/// let groups = group_by_department(&roster);
/// let order: Vec<&str> = groups.iter().map(|(name, _)| name).collect();
/// assert_eq!(order, ["Sales", "IT"]);
/// # Ok::<(), corp_summary::error::ReportError>(())
/// ```
pub fn group_by_department(roster: &[Employee]) -> DepartmentGroups<'_> {
    let mut groups = DepartmentGroups::default();
    for employee in roster {
        groups.push(employee);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn employee(name: &str, department: &str, salary: i64) -> Employee {
        Employee {
            full_name: name.to_string(),
            department: department.to_string(),
            division: String::new(),
            position: String::new(),
            score: Decimal::ONE,
            salary,
        }
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let roster = vec![
            employee("Ada", "Sales", 100),
            employee("Bob", "IT", 200),
            employee("Cid", "Sales", 300),
            employee("Dee", "HR", 400),
        ];

        let groups = group_by_department(&roster);
        let order: Vec<&str> = groups.iter().map(|(name, _)| name).collect();

        assert_eq!(order, ["Sales", "IT", "HR"]);
    }

    #[test]
    fn test_members_keep_roster_order() {
        let roster = vec![
            employee("Ada", "Sales", 100),
            employee("Bob", "IT", 200),
            employee("Cid", "Sales", 300),
        ];

        let groups = group_by_department(&roster);
        let (_, sales) = groups.iter().next().unwrap();
        let names: Vec<&str> = sales.iter().map(|e| e.full_name.as_str()).collect();

        assert_eq!(names, ["Ada", "Cid"]);
    }

    #[test]
    fn test_group_sizes_sum_to_roster_length() {
        let roster = vec![
            employee("Ada", "Sales", 100),
            employee("Bob", "IT", 200),
            employee("Cid", "Sales", 300),
            employee("Dee", "IT", 400),
            employee("Eve", "HR", 500),
        ];

        let groups = group_by_department(&roster);
        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();

        assert_eq!(total, roster.len());
    }

    #[test]
    fn test_empty_roster_yields_no_groups() {
        let groups = group_by_department(&[]);

        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
    }

    #[test]
    fn test_distinct_departments_counted_once() {
        let roster = vec![
            employee("Ada", "Sales", 100),
            employee("Bob", "Sales", 200),
            employee("Cid", "Sales", 300),
        ];

        let groups = group_by_department(&roster);

        assert_eq!(groups.len(), 1);
    }
}

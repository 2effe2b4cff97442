//! Employee model.
//!
//! This module defines the Employee struct representing one roster record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents one employee record from the roster.
///
/// Records are constructed once by the roster parser and are immutable
/// afterwards; the roster owns them in file order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's full name.
    pub full_name: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The division within the department.
    pub division: String,
    /// The employee's position title.
    pub position: String,
    /// The employee's performance score.
    pub score: Decimal,
    /// The employee's salary, in whole currency units.
    pub salary: i64,
}

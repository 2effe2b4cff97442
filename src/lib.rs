//! Department salary summary reports for corporate rosters.
//!
//! This crate loads a semicolon-delimited employee roster, groups the
//! employees by department, computes per-department salary statistics,
//! and renders the result as a console table or a CSV export.

#![warn(missing_docs)]

pub mod aggregation;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod roster;

//! Roster loading for the summary report pipeline.
//!
//! This module turns a delimiter-separated roster file into an ordered
//! sequence of employee records: the parser converts one line into an
//! [`Employee`](crate::models::Employee), the loader applies it to every
//! line of the file after the header.

mod loader;
mod parser;

pub use loader::load_roster;
pub use parser::{RECORD_FIELD_COUNT, parse_record};

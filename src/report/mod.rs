//! Report rendering for department summaries.
//!
//! Two independent renderers over the same summary sequence: a fixed-width
//! console table and a `;`-delimited CSV export. Both shape nothing
//! themselves; the statistics arrive fully computed from the aggregation
//! stage.

pub mod console;
pub mod csv;

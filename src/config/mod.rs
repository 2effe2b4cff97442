//! Report configuration.
//!
//! This module provides the typed configuration for a report run and its
//! YAML loading. Every field has a default reproducing the stock behavior,
//! so a deployment without a configuration file needs nothing else.

mod loader;
mod types;

pub use types::ReportConfig;

//! Configuration types for report runs.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from an optional YAML configuration file.

use std::path::PathBuf;

use serde::Deserialize;

/// Configuration for one report run.
///
/// Every field is individually optional in the YAML; omitted fields fall
/// back to the stock filenames and delimiter.
///
/// # Example
///
/// ```yaml
/// input_path: rosters/april.csv
/// delimiter: ";"
/// output_path: reports/april_summary.csv
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReportConfig {
    /// Path to the input roster file.
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,
    /// Field delimiter of the input roster.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Destination of the CSV export.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            delimiter: default_delimiter(),
            output_path: default_output_path(),
        }
    }
}

fn default_input_path() -> PathBuf {
    PathBuf::from("Corp_Summary.csv")
}

fn default_delimiter() -> char {
    ';'
}

fn default_output_path() -> PathBuf {
    PathBuf::from("summary_report.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_stock_filenames() {
        let config = ReportConfig::default();

        assert_eq!(config.input_path, PathBuf::from("Corp_Summary.csv"));
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.output_path, PathBuf::from("summary_report.csv"));
    }

    #[test]
    fn test_deserialize_full_config() {
        let yaml = "input_path: rosters/april.csv\ndelimiter: \",\"\noutput_path: out.csv\n";

        let config: ReportConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.input_path, PathBuf::from("rosters/april.csv"));
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.output_path, PathBuf::from("out.csv"));
    }

    #[test]
    fn test_deserialize_partial_config_fills_defaults() {
        let yaml = "input_path: rosters/april.csv\n";

        let config: ReportConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.input_path, PathBuf::from("rosters/april.csv"));
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.output_path, PathBuf::from("summary_report.csv"));
    }

    #[test]
    fn test_deserialize_empty_mapping_is_all_defaults() {
        let config: ReportConfig = serde_yaml::from_str("{}").unwrap();

        assert_eq!(config, ReportConfig::default());
    }
}

//! Configuration loading functionality.
//!
//! This module provides YAML loading for [`ReportConfig`], including the
//! load-or-default entry point the interactive driver uses.

use std::fs;
use std::path::Path;

use crate::error::{ReportError, ReportResult};

use super::types::ReportConfig;

impl ReportConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParse`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use corp_summary::config::ReportConfig;
    ///
    /// let config = ReportConfig::load("report_config.yaml")?;
    /// # Ok::<(), corp_summary::error::ReportError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ReportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ReportError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads configuration from a YAML file, or falls back to defaults when
    /// the file does not exist.
    ///
    /// A present-but-invalid file still fails: silently ignoring a broken
    /// configuration would run the report against the wrong paths.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(path)
    }
}

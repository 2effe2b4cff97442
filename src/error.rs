//! Error types for the summary report pipeline.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions that can occur while loading a roster,
//! reading configuration, or exporting a report.

use thiserror::Error;

/// The main error type for the summary report pipeline.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use corp_summary::error::ReportError;
///
/// let error = ReportError::InputNotFound {
///     path: "/missing/roster.csv".to_string(),
/// };
/// assert_eq!(error.to_string(), "Input file not found: /missing/roster.csv");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input roster file was not found at the specified path.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The input roster file could not be read.
    #[error("Failed to read input file '{path}': {message}")]
    InputRead {
        /// The path to the file that failed to read.
        path: String,
        /// A description of the I/O error.
        message: String,
    },

    /// A roster line did not split into the expected number of fields.
    #[error("Malformed record on line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// The 1-based line number of the malformed record.
        line: usize,
        /// The number of fields a record must have.
        expected: usize,
        /// The number of fields the line actually split into.
        found: usize,
    },

    /// A numeric field of a roster record failed to convert.
    #[error("Malformed record on line {line}: field '{field}' has invalid numeric value '{value}'")]
    InvalidNumber {
        /// The 1-based line number of the malformed record.
        line: usize,
        /// The name of the field that failed to convert.
        field: String,
        /// The raw text that failed numeric conversion.
        value: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The summary report could not be written to disk.
    #[error("Failed to write summary report to '{path}': {message}")]
    ExportFailed {
        /// The path that could not be written.
        path: String,
        /// A description of the I/O error.
        message: String,
    },
}

/// A type alias for Results that return ReportError.
pub type ReportResult<T> = Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_displays_path() {
        let error = ReportError::InputNotFound {
            path: "/missing/roster.csv".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Input file not found: /missing/roster.csv"
        );
    }

    #[test]
    fn test_field_count_displays_line_and_counts() {
        let error = ReportError::FieldCount {
            line: 3,
            expected: 6,
            found: 5,
        };
        assert_eq!(
            error.to_string(),
            "Malformed record on line 3: expected 6 fields, found 5"
        );
    }

    #[test]
    fn test_invalid_number_displays_field_and_value() {
        let error = ReportError::InvalidNumber {
            line: 7,
            field: "salary".to_string(),
            value: "lots".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed record on line 7: field 'salary' has invalid numeric value 'lots'"
        );
    }

    #[test]
    fn test_input_read_displays_path_and_message() {
        let error = ReportError::InputRead {
            path: "roster.csv".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to read input file 'roster.csv': permission denied"
        );
    }

    #[test]
    fn test_config_parse_displays_path_and_message() {
        let error = ReportError::ConfigParse {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_export_failed_displays_path_and_message() {
        let error = ReportError::ExportFailed {
            path: "summary_report.csv".to_string(),
            message: "disk full".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to write summary report to 'summary_report.csv': disk full"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ReportError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_input_not_found() -> ReportResult<()> {
            Err(ReportError::InputNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> ReportResult<()> {
            returns_input_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

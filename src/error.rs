//! Error handling for LFA conversion.
//!
//! Provides error types with context for row classification, record
//! validation, file I/O and JSON serialization failures.

use thiserror::Error;

/// Result type alias for the LFA processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for LFA processing operations
#[derive(Error, Debug)]
pub enum Error {
    /// One or more fields required by the output record were never populated
    #[error("Missing required field(s) in '{source_name}': {}", fields.join(", "))]
    MissingField {
        source_name: String,
        fields: Vec<&'static str>,
    },

    /// A header-marker row whose columns could not be resolved
    #[error("Malformed header at row {row}: {reason}")]
    MalformedHeader { row: usize, reason: String },

    /// A row shorter than a fixed-position access expects
    #[error("Row {row} has {len} field(s), field {index} is out of range")]
    IndexOutOfRange { row: usize, index: usize, len: usize },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: csv::Error,
    },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Input path or pattern could not be expanded
    #[error("Invalid input '{input}': {message}")]
    InvalidInput { input: String, message: String },
}

impl Error {
    /// Create a missing field error
    pub fn missing_field(source_name: impl Into<String>, fields: Vec<&'static str>) -> Self {
        Self::MissingField {
            source_name: source_name.into(),
            fields,
        }
    }

    /// Create a malformed header error
    pub fn malformed_header(row: usize, reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            row,
            reason: reason.into(),
        }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(row: usize, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { row, index, len }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: csv::Error,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_lists_every_field() {
        let error = Error::missing_field("sample_1.csv", vec!["thickness", "diameter"]);
        assert_eq!(
            error.to_string(),
            "Missing required field(s) in 'sample_1.csv': thickness, diameter"
        );
    }

    #[test]
    fn test_index_out_of_range_message() {
        let error = Error::index_out_of_range(12, 4, 2);
        assert_eq!(
            error.to_string(),
            "Row 12 has 2 field(s), field 4 is out of range"
        );
    }
}

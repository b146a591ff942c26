//! Table and registry error types.

use std::fmt;
use thiserror::Error;

use crate::types::{DataType, RowId};

/// Error codes for categorizing errors.
///
/// These codes can be used for programmatic error handling and
/// are stable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // General errors (0x0000 - 0x00FF)
    /// Invalid configuration.
    InvalidConfig = 0x0001,

    // I/O errors (0x0100 - 0x01FF)
    /// General I/O error.
    Io = 0x0100,

    // Registry errors (0x0200 - 0x02FF)
    /// A table with the name already exists.
    DuplicateName = 0x0200,
    /// No table with the name exists.
    NameNotFound = 0x0201,

    // Schema errors (0x0300 - 0x03FF)
    /// Column index outside the schema.
    IndexOutOfRange = 0x0300,
    /// Operation would break a table invariant.
    InvariantViolation = 0x0301,

    // Row errors (0x0400 - 0x04FF)
    /// Row value count differs from the column count.
    ArityMismatch = 0x0400,
    /// Row value could not be parsed as the column type.
    ParseError = 0x0401,
    /// No row with the id exists.
    RowNotFound = 0x0402,
}

impl ErrorCode {
    /// Returns the numeric code.
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Returns the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match (*self as u16) >> 8 {
            0x00 => "General",
            0x01 => "I/O",
            0x02 => "Registry",
            0x03 => "Schema",
            0x04 => "Row",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The main error type for Tabula.
///
/// Every failure is reported to the immediate caller; no operation leaves
/// a table or registry partially mutated when it returns one of these.
///
/// # Example
///
/// ```rust
/// use tabula_common::error::{TabulaError, TabulaResult};
///
/// fn drop_missing(name: &str) -> TabulaResult<()> {
///     Err(TabulaError::NameNotFound { name: name.to_string() })
/// }
///
/// assert_eq!(
///     drop_missing("users").unwrap_err().to_string(),
///     "table 'users' does not exist"
/// );
/// ```
#[derive(Debug, Error)]
pub enum TabulaError {
    // ==========================================================================
    // Registry Errors
    // ==========================================================================
    /// A table with this name is already registered.
    #[error("table '{name}' already exists")]
    DuplicateName {
        /// The conflicting table name.
        name: String,
    },

    /// No table with this name is registered.
    #[error("table '{name}' does not exist")]
    NameNotFound {
        /// The missing table name.
        name: String,
    },

    // ==========================================================================
    // Schema Errors
    // ==========================================================================
    /// Column index is past the end of the schema.
    #[error("column index {index} out of range for {len} columns")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of columns in the schema.
        len: usize,
    },

    /// The operation would break a table invariant.
    #[error("invariant violation: {message}")]
    InvariantViolation {
        /// Description of the violated invariant.
        message: String,
    },

    // ==========================================================================
    // Row Errors
    // ==========================================================================
    /// Row values do not line up with the schema.
    #[error("row has {actual} values, table has {expected} columns")]
    ArityMismatch {
        /// Number of columns in the schema.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A value could not be converted to its column's type.
    #[error("cannot parse '{value}' as {data_type} for column '{column}': {reason}")]
    ParseError {
        /// Name of the target column.
        column: String,
        /// Declared type of the target column.
        data_type: DataType,
        /// The offending input.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// No row with this id exists.
    #[error("row {id} does not exist")]
    RowNotFound {
        /// The missing row id.
        id: RowId,
    },

    // ==========================================================================
    // Ambient Errors
    // ==========================================================================
    /// I/O error from the underlying system.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Error message.
        message: String,
    },
}

impl TabulaError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateName { .. } => ErrorCode::DuplicateName,
            Self::NameNotFound { .. } => ErrorCode::NameNotFound,
            Self::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            Self::InvariantViolation { .. } => ErrorCode::InvariantViolation,
            Self::ArityMismatch { .. } => ErrorCode::ArityMismatch,
            Self::ParseError { .. } => ErrorCode::ParseError,
            Self::RowNotFound { .. } => ErrorCode::RowNotFound,
            Self::Io { .. } => ErrorCode::Io,
            Self::InvalidConfig { .. } => ErrorCode::InvalidConfig,
        }
    }

    /// Returns true if this error came from the table registry.
    #[must_use]
    pub const fn is_registry_error(&self) -> bool {
        matches!(self, Self::DuplicateName { .. } | Self::NameNotFound { .. })
    }

    /// Creates an invariant violation error.
    #[must_use]
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::InvariantViolation {
            message: message.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = TabulaError::RowNotFound { id: RowId::new(3) };
        assert_eq!(err.code(), ErrorCode::RowNotFound);
        assert_eq!(err.code().category(), "Row");

        let err = TabulaError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.code().category(), "Schema");
    }

    #[test]
    fn test_error_display() {
        let err = TabulaError::RowNotFound { id: RowId::new(42) };
        assert_eq!(err.to_string(), "row 42 does not exist");

        let err = TabulaError::ArityMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "row has 2 values, table has 3 columns");

        let err = TabulaError::ParseError {
            column: "age".to_string(),
            data_type: DataType::Integer,
            value: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot parse 'abc' as integer for column 'age': invalid digit found in string"
        );
    }

    #[test]
    fn test_registry_errors() {
        assert!(TabulaError::DuplicateName {
            name: "t".to_string()
        }
        .is_registry_error());
        assert!(!TabulaError::invariant("last column").is_registry_error());
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TabulaError = io_err.into();
        assert_eq!(err.code(), ErrorCode::Io);
        assert_eq!(err.code().as_u16(), 0x0100);
    }
}

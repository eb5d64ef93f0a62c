//! Error types for lookup operations.
//!
//! Every failure carries an [`ErrorCode`] for programmatic handling and a
//! human-readable message that is safe to return to clients.
//!
//! Error codes follow a pattern: L{category}{number}
//! - 1xxx: Request errors (missing parameter, disallowed field)
//! - 2xxx: Lookup outcomes (not found)
//! - 3xxx: Infrastructure errors (connection, driver)
//! - 7xxx: Configuration errors
//!
//! ```rust
//! use doclookup_query::{ErrorCode, LookupError};
//!
//! let err = LookupError::not_found();
//! assert_eq!(err.code, ErrorCode::RecordNotFound);
//! assert_eq!(err.message, "Not found");
//! assert_eq!(err.to_string(), "[L2001] Not found");
//! ```

use std::fmt;
use thiserror::Error;

/// Result type for lookup operations.
pub type LookupResult<T> = Result<T, LookupError>;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Required query parameter missing (L1001).
    MissingParameter = 1001,
    /// Field is not in the allow-list (L1002).
    FieldNotAllowed = 1002,

    /// No document matched (L2001).
    RecordNotFound = 2001,

    /// Database connection failed (L3001).
    ConnectionFailed = 3001,
    /// General database error (L3002).
    DatabaseError = 3002,

    /// Missing configuration (L7001).
    MissingConfiguration = 7001,
}

impl ErrorCode {
    /// Get the error code string (e.g., "L1001").
    pub fn code(&self) -> String {
        format!("L{}", *self as u16)
    }

    /// Whether the error was caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingParameter | Self::FieldNotAllowed)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors that can occur while resolving or executing a lookup.
#[derive(Error, Debug)]
pub struct LookupError {
    /// The error code.
    pub code: ErrorCode,
    /// The client-facing message.
    pub message: String,
    /// The source error (if any).
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl LookupError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Set the source error.
    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Create a missing parameter error.
    pub fn missing_parameter(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingParameter, message)
    }

    /// Create a disallowed field error listing the accepted fields.
    pub fn field_not_allowed(allowed: &str) -> Self {
        Self::new(
            ErrorCode::FieldNotAllowed,
            format!("Field not allowed. Use one of: {}", allowed),
        )
    }

    /// Create a not found error.
    pub fn not_found() -> Self {
        Self::new(ErrorCode::RecordNotFound, "Not found")
    }

    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConnectionFailed, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Create a missing configuration error.
    pub fn missing_configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingConfiguration, message)
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        self.code.is_client_error()
    }

    /// Check if this is a not found outcome.
    pub fn is_not_found(&self) -> bool {
        self.code == ErrorCode::RecordNotFound
    }

    /// Check if this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        self.code == ErrorCode::MissingConfiguration
    }
}

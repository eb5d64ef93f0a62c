//! Error types for MongoDB operations.

use doclookup_query::LookupError;
use mongodb::error::ErrorKind;
use thiserror::Error;

/// Result type for MongoDB operations.
pub type MongoResult<T> = Result<T, MongoError>;

/// Errors that can occur during MongoDB operations.
#[derive(Error, Debug)]
pub enum MongoError {
    /// MongoDB driver error.
    #[error("mongodb error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Connection error.
    #[error("connection error: {0}")]
    Connection(String),

    /// Query execution error.
    #[error("query error: {0}")]
    Query(String),
}

impl MongoError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a connection error.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a query error.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }

    /// Check if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this is a connection error.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

impl From<MongoError> for LookupError {
    fn from(err: MongoError) -> Self {
        match err {
            MongoError::Config(msg) => LookupError::missing_configuration(msg),
            MongoError::Connection(msg) => LookupError::connection(msg),
            MongoError::Driver(e) => {
                let msg = e.to_string();
                if is_unreachable(&e) {
                    return LookupError::connection(msg).with_source(e);
                }
                LookupError::database(msg).with_source(e)
            }
            MongoError::Query(msg) => LookupError::database(msg),
        }
    }
}

/// Whether a driver error means the server could not be reached.
fn is_unreachable(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use doclookup_query::ErrorCode;

    #[test]
    fn test_error_creation() {
        let err = MongoError::config("Missing MONGO_URI");
        assert!(err.is_config_error());

        let err = MongoError::connection("connection refused");
        assert!(err.is_connection_error());
    }

    #[test]
    fn test_error_display() {
        let err = MongoError::config("Missing MONGO_URI");
        assert_eq!(err.to_string(), "configuration error: Missing MONGO_URI");
    }

    #[test]
    fn test_into_lookup_error() {
        let err: LookupError = MongoError::config("Missing MONGO_URI").into();
        assert!(err.is_configuration());
        assert_eq!(err.message, "Missing MONGO_URI");

        let err: LookupError = MongoError::connection("refused").into();
        assert_eq!(err.code, ErrorCode::ConnectionFailed);

        let err: LookupError = MongoError::query("bad sort").into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }

    #[test]
    fn test_driver_errors_classified_by_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: LookupError = MongoError::Driver(mongodb::error::Error::from(io)).into();
        assert_eq!(err.code, ErrorCode::ConnectionFailed);
        assert!(std::error::Error::source(&err).is_some());
    }
}

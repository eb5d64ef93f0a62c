//! Error responses and server errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use doclookup_mongodb::MongoError;
use doclookup_query::LookupError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
}

/// A [`LookupError`] rendered as an HTTP response.
///
/// Validation failures map to 400, not found to 404 and everything else
/// to 500.
#[derive(Debug)]
pub struct ApiError(pub LookupError);

impl ApiError {
    /// Status code for the wrapped error.
    pub fn status(&self) -> StatusCode {
        if self.0.is_validation() {
            StatusCode::BAD_REQUEST
        } else if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    /// Response body for the wrapped error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.0.message.clone(),
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl From<MongoError> for ApiError {
    fn from(err: MongoError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, "Lookup failed");
        }
        (status, Json(self.body())).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors raised while running the HTTP server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The listen address could not be parsed.
    #[error("invalid listen address '{0}'")]
    InvalidAddress(String),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that failed.
        addr: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),

    /// A table endpoint URL was invalid.
    #[error("invalid table endpoint: {0}")]
    Endpoint(#[from] doclookup_table::FetchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError(LookupError::missing_parameter("Missing 'id'")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(LookupError::field_not_allowed("email")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError(LookupError::not_found()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError(LookupError::missing_configuration("Missing MONGO_URI")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_body_uses_plain_message() {
        let err = ApiError(LookupError::not_found());
        assert_eq!(err.body().error, "Not found");
    }

    #[test]
    fn test_mongo_config_error_is_server_error() {
        let err = ApiError::from(MongoError::config("Missing DB_NAME"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().error, "Missing DB_NAME");
    }
}

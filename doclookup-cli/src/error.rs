//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

use doclookup_axum::ServerError;
use doclookup_mongodb::MongoError;
use doclookup_query::LookupError;
use doclookup_table::FetchError;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(doclookup::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(doclookup::config))]
    Config(String),

    /// Invalid lookup request
    #[error("Invalid request: {0}")]
    #[diagnostic(code(doclookup::validation), help("Run `doclookup meta` to list the allowed fields"))]
    Validation(String),

    /// No document matched
    #[error("Not found")]
    #[diagnostic(code(doclookup::not_found))]
    NotFound,

    /// Database error
    #[error("Database error: {0}")]
    #[diagnostic(code(doclookup::database), help("Check MONGO_URI, DB_NAME and COLLECTION_NAME"))]
    Database(String),

    /// Server error
    #[error("Server error: {0}")]
    #[diagnostic(code(doclookup::server))]
    Server(#[from] ServerError),

    /// Output error
    #[error("Output error: {0}")]
    #[diagnostic(code(doclookup::output))]
    Output(String),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<LookupError> for CliError {
    fn from(err: LookupError) -> Self {
        if err.is_validation() {
            CliError::Validation(err.message)
        } else if err.is_not_found() {
            CliError::NotFound
        } else if err.is_configuration() {
            CliError::Config(err.message)
        } else {
            CliError::Database(err.message)
        }
    }
}

impl From<MongoError> for CliError {
    fn from(err: MongoError) -> Self {
        LookupError::from(err).into()
    }
}

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

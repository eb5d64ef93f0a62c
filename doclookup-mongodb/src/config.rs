//! MongoDB connection configuration.

use std::time::Duration;

use doclookup_query::EnvSource;
use mongodb::options::ClientOptions;

use crate::error::{MongoError, MongoResult};

/// Environment variable holding the connection URI.
pub const MONGO_URI_VAR: &str = "MONGO_URI";
/// Environment variable holding the database name.
pub const DB_NAME_VAR: &str = "DB_NAME";
/// Environment variable holding the collection name.
pub const COLLECTION_NAME_VAR: &str = "COLLECTION_NAME";

/// Maximum connection pool size used for lookups.
pub const LOOKUP_MAX_POOL_SIZE: u32 = 5;
/// Server selection timeout used for lookups.
pub const LOOKUP_SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// MongoDB connection configuration.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// MongoDB connection URI.
    pub uri: String,
    /// Database name.
    pub database: String,
    /// Application name (shown in server logs).
    pub app_name: Option<String>,
    /// Maximum connection pool size.
    pub max_pool_size: Option<u32>,
    /// Connection timeout.
    pub connect_timeout: Option<Duration>,
    /// Server selection timeout.
    pub server_selection_timeout: Option<Duration>,
    /// Retry reads.
    pub retry_reads: Option<bool>,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: String::new(),
            app_name: Some("doclookup".to_string()),
            max_pool_size: Some(LOOKUP_MAX_POOL_SIZE),
            connect_timeout: Some(Duration::from_secs(10)),
            server_selection_timeout: Some(LOOKUP_SERVER_SELECTION_TIMEOUT),
            retry_reads: Some(false),
        }
    }
}

impl MongoConfig {
    /// Create a new configuration from a MongoDB URI.
    pub fn from_uri(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            ..Self::default()
        }
    }

    /// Set the maximum pool size.
    pub fn with_max_pool_size(mut self, size: u32) -> Self {
        self.max_pool_size = Some(size);
        self
    }

    /// Set the server selection timeout.
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = Some(timeout);
        self
    }

    /// Convert to MongoDB ClientOptions.
    pub async fn to_client_options(&self) -> MongoResult<ClientOptions> {
        let mut options = ClientOptions::parse(&self.uri)
            .await
            .map_err(|e| MongoError::config(format!("failed to parse URI: {}", e)))?;

        self.apply(&mut options);
        Ok(options)
    }

    fn apply(&self, options: &mut ClientOptions) {
        if let Some(ref app_name) = self.app_name {
            options.app_name = Some(app_name.clone());
        }

        if let Some(max_pool) = self.max_pool_size {
            options.max_pool_size = Some(max_pool);
        }

        if let Some(connect_timeout) = self.connect_timeout {
            options.connect_timeout = Some(connect_timeout);
        }

        if let Some(timeout) = self.server_selection_timeout {
            options.server_selection_timeout = Some(timeout);
        }

        if let Some(retry_reads) = self.retry_reads {
            options.retry_reads = Some(retry_reads);
        }
    }
}

/// Connection parameters as found in the environment.
///
/// Values are captured once at startup but only validated when the first
/// connection is opened, so the service can start (and answer metadata
/// requests) without a database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionEnv {
    /// Connection URI.
    pub uri: Option<String>,
    /// Database name.
    pub database: Option<String>,
    /// Collection name.
    pub collection: Option<String>,
}

impl ConnectionEnv {
    /// Capture connection parameters from an environment source.
    pub fn from_env(env: &impl EnvSource) -> Self {
        Self {
            uri: env.get_trimmed(MONGO_URI_VAR),
            database: env.get_trimmed(DB_NAME_VAR),
            collection: env.get_trimmed(COLLECTION_NAME_VAR),
        }
    }

    /// Validate the parameters into a collection configuration.
    pub fn to_config(&self) -> MongoResult<CollectionConfig> {
        let uri = self
            .uri
            .clone()
            .ok_or_else(|| MongoError::config(format!("Missing {}", MONGO_URI_VAR)))?;
        let database = self
            .database
            .clone()
            .ok_or_else(|| MongoError::config(format!("Missing {}", DB_NAME_VAR)))?;
        let collection = self
            .collection
            .clone()
            .ok_or_else(|| MongoError::config(format!("Missing {}", COLLECTION_NAME_VAR)))?;

        Ok(CollectionConfig {
            mongo: MongoConfig::from_uri(uri, database),
            collection,
        })
    }
}

/// Everything needed to reach the looked-up collection.
#[derive(Debug, Clone)]
pub struct CollectionConfig {
    /// Client configuration.
    pub mongo: MongoConfig,
    /// Collection name.
    pub collection: String,
}

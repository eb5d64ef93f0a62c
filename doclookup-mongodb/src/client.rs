//! MongoDB client wrapper and the lazily-initialized collection provider.

use bson::{Document, doc};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use tokio::sync::OnceCell;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::{ConnectionEnv, MongoConfig};
use crate::error::{MongoError, MongoResult};

/// A MongoDB client with connection pooling.
///
/// The MongoDB driver handles connection pooling internally; the selected
/// database keeps the driver's client alive.
#[derive(Clone)]
pub struct MongoClient {
    database: Database,
}

impl MongoClient {
    /// Create a new client from configuration.
    ///
    /// The driver connects lazily; call [`MongoClient::ping`] to force
    /// server selection.
    pub async fn new(config: MongoConfig) -> MongoResult<Self> {
        let options = config.to_client_options().await?;

        let client = Client::with_options(options)
            .map_err(|e| MongoError::connection(format!("failed to create client: {}", e)))?;

        info!(
            database = %config.database,
            max_pool_size = ?config.max_pool_size,
            "MongoDB client created"
        );

        Ok(Self {
            database: client.database(&config.database),
        })
    }

    /// Get a collection with BSON documents.
    pub fn collection_doc(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }

    /// Ping the server, failing once the server selection timeout elapses.
    pub async fn ping(&self) -> MongoResult<()> {
        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| MongoError::connection(e.to_string()))?;
        Ok(())
    }
}

/// Request an ascending background index on `field`.
///
/// The returned task is meant to be detached: index creation is best-effort
/// and its failure is only logged.
pub fn spawn_background_index(collection: Collection<Document>, field: String) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut keys = Document::new();
        keys.insert(field.as_str(), 1);

        let options = IndexOptions::builder().background(true).build();
        let model = IndexModel::builder().keys(keys).options(options).build();

        match collection.create_index(model, None).await {
            Ok(result) => debug!(index = %result.index_name, "Background index ready"),
            Err(e) => debug!(field = %field, error = %e, "Background index request failed"),
        }
    })
}

/// A connected client together with the looked-up collection.
#[derive(Clone)]
pub struct Connected {
    /// The client the collection belongs to.
    pub client: MongoClient,
    /// The collection handle.
    pub collection: Collection<Document>,
}

/// Hands out the single collection handle used for the process lifetime.
///
/// The first call to [`CollectionProvider::get`] validates the connection
/// parameters, connects, selects the collection and (if configured) requests
/// the secondary index. Concurrent first calls wait on the same
/// initialization; a failed initialization leaves the provider empty so the
/// next call tries again.
pub struct CollectionProvider {
    env: ConnectionEnv,
    secondary_unique_field: Option<String>,
    cell: OnceCell<Connected>,
}

impl CollectionProvider {
    /// Create a provider from captured connection parameters.
    pub fn new(env: ConnectionEnv) -> Self {
        Self {
            env,
            secondary_unique_field: None,
            cell: OnceCell::new(),
        }
    }

    /// Request a background index on this field after connecting.
    pub fn with_secondary_unique_field(mut self, field: Option<String>) -> Self {
        self.secondary_unique_field = field;
        self
    }

    /// Whether the connection has been established.
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    /// Get the collection handle, connecting on first use.
    pub async fn get(&self) -> MongoResult<Collection<Document>> {
        Ok(self.connected().await?.collection.clone())
    }

    /// Get the connected client and collection, connecting on first use.
    pub async fn connected(&self) -> MongoResult<&Connected> {
        self.cell.get_or_try_init(|| self.connect()).await
    }

    async fn connect(&self) -> MongoResult<Connected> {
        let config = self.env.to_config()?;

        let client = MongoClient::new(config.mongo).await?;
        client.ping().await?;

        let collection = client.collection_doc(&config.collection);
        info!(collection = %config.collection, "Collection provider initialized");

        if let Some(field) = &self.secondary_unique_field {
            drop(spawn_background_index(collection.clone(), field.clone()));
        }

        Ok(Connected { client, collection })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{COLLECTION_NAME_VAR, DB_NAME_VAR};
    use doclookup_query::{ErrorCode, LookupError, MapEnvSource};
    use mongodb::options::ClientOptions;

    /// A collection on a host nothing listens on, giving up after 100ms.
    async fn unreachable_collection() -> Collection<Document> {
        let options = ClientOptions::parse("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=100")
            .await
            .unwrap();
        Client::with_options(options)
            .unwrap()
            .database("school")
            .collection("students")
    }

    #[tokio::test]
    async fn test_missing_uri_is_config_error() {
        let env = MapEnvSource::new()
            .set(DB_NAME_VAR, "school")
            .set(COLLECTION_NAME_VAR, "students");
        let provider = CollectionProvider::new(ConnectionEnv::from_env(&env));

        let err = provider.get().await.unwrap_err();
        assert!(err.is_config_error());
        assert!(!provider.is_initialized());
    }

    #[tokio::test]
    async fn test_failed_init_is_retried() {
        let provider = CollectionProvider::new(ConnectionEnv::default());

        assert!(provider.get().await.is_err());
        assert!(provider.get().await.is_err());
        assert!(!provider.is_initialized());
    }

    #[tokio::test]
    async fn test_background_index_failure_is_swallowed() {
        let collection = unreachable_collection().await;

        let task = spawn_background_index(collection, "email".into());
        assert!(task.await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_server_maps_to_connection_error() {
        let collection = unreachable_collection().await;

        let err = collection.find_one(doc! {}, None).await.unwrap_err();
        let err: LookupError = MongoError::from(err).into();
        assert_eq!(err.code, ErrorCode::ConnectionFailed);
    }
}

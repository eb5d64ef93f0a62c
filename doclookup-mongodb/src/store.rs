//! The store seam between lookup handlers and the database.
//!
//! Handlers talk to a [`DocumentStore`]; [`MongoStore`] is the production
//! implementation backed by the [`CollectionProvider`], and [`MemoryStore`]
//! serves a fixed set of documents for demos and tests.

use std::sync::Arc;

use async_trait::async_trait;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::options::FindOptions;
use tracing::debug;

use crate::client::CollectionProvider;
use crate::document::DocumentExt;
use crate::error::{MongoError, MongoResult};

/// Read access to the looked-up collection.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Find the first document matching an equality filter.
    async fn find_one(&self, filter: Document) -> MongoResult<Option<Document>>;

    /// Fetch a page of documents sorted ascending on `sort_field`.
    async fn find_page(&self, sort_field: &str, skip: u64, limit: u64)
    -> MongoResult<Vec<Document>>;

    /// Count every document in the collection.
    async fn count(&self) -> MongoResult<u64>;

    /// Check that the store is reachable.
    async fn ping(&self) -> MongoResult<()>;
}

/// [`DocumentStore`] backed by MongoDB.
#[derive(Clone)]
pub struct MongoStore {
    provider: Arc<CollectionProvider>,
}

impl MongoStore {
    /// Create a store over a collection provider.
    pub fn new(provider: Arc<CollectionProvider>) -> Self {
        Self { provider }
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &CollectionProvider {
        &self.provider
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_one(&self, filter: Document) -> MongoResult<Option<Document>> {
        let collection = self.provider.get().await?;
        debug!(filter = %filter, "Executing find_one");

        Ok(collection.find_one(filter, None).await?)
    }

    async fn find_page(
        &self,
        sort_field: &str,
        skip: u64,
        limit: u64,
    ) -> MongoResult<Vec<Document>> {
        let collection = self.provider.get().await?;
        let limit = i64::try_from(limit)
            .map_err(|_| MongoError::query(format!("page size {} is too large", limit)))?;

        let mut sort = Document::new();
        sort.insert(sort_field, 1);

        let options = FindOptions::builder()
            .sort(sort)
            .skip(skip)
            .limit(limit)
            .build();

        debug!(sort_field = %sort_field, skip, limit, "Executing find_page");

        let cursor = collection.find(doc! {}, options).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn count(&self) -> MongoResult<u64> {
        let collection = self.provider.get().await?;
        Ok(collection.count_documents(doc! {}, None).await?)
    }

    async fn ping(&self) -> MongoResult<()> {
        self.provider.connected().await?.client.ping().await
    }
}

/// In-memory [`DocumentStore`] holding documents in insertion order.
///
/// `find_page` keeps insertion order and ignores the sort field.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    docs: Vec<Document>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given documents.
    pub fn with_documents(docs: impl IntoIterator<Item = Document>) -> Self {
        Self {
            docs: docs.into_iter().collect(),
        }
    }

    /// Add a document.
    pub fn insert(mut self, doc: Document) -> Self {
        self.docs.push(doc);
        self
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_one(&self, filter: Document) -> MongoResult<Option<Document>> {
        Ok(self.docs.iter().find(|doc| doc.matches(&filter)).cloned())
    }

    async fn find_page(
        &self,
        _sort_field: &str,
        skip: u64,
        limit: u64,
    ) -> MongoResult<Vec<Document>> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(self.docs.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn count(&self) -> MongoResult<u64> {
        Ok(self.docs.len() as u64)
    }

    async fn ping(&self) -> MongoResult<()> {
        Ok(())
    }
}

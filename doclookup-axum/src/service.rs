//! Lookup operations shared by the HTTP handlers and the table page.
//!
//! Every request is validated before the store is touched, so a
//! disallowed field or a blank identifier never reaches the database.

use std::sync::Arc;

use async_trait::async_trait;
use doclookup_mongodb::{DocumentStore, field_filter, id_filter, into_json, into_json_items};
use doclookup_query::{ByField, ById, LookupError, LookupResult, LookupSettings, Meta, PageRequest};
use doclookup_table::{FetchError, FetchResult, ListPage, LookupSource, SearchPayload};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;

/// One page of the `/list` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    /// Documents on the page, as extended JSON.
    pub items: Vec<Value>,
    /// Total documents, when requested.
    pub total: Option<u64>,
    /// 1-based page number.
    pub page: u64,
    /// Rows per page.
    pub page_size: u64,
}

/// Body of the `/health` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    /// `ok` or `unavailable`.
    pub status: &'static str,
}

/// Lookups over a [`DocumentStore`] with fixed settings.
#[derive(Clone)]
pub struct LookupService {
    settings: Arc<LookupSettings>,
    store: Arc<dyn DocumentStore>,
}

impl LookupService {
    /// Create a service.
    pub fn new(settings: Arc<LookupSettings>, store: Arc<dyn DocumentStore>) -> Self {
        Self { settings, store }
    }

    /// The settings in use.
    pub fn settings(&self) -> &LookupSettings {
        &self.settings
    }

    /// The identity field and allow-list.
    pub fn meta(&self) -> Meta {
        self.settings.meta()
    }

    /// Find a document by an allow-listed field.
    pub async fn by_field(&self, field: Option<&str>, value: Option<&str>) -> LookupResult<Value> {
        let lookup = ByField::parse(field, value, &self.settings.allowed_fields)?;
        debug!(field = %lookup.field(), "Lookup by field");

        self.store
            .find_one(field_filter(&lookup))
            .await?
            .map(into_json)
            .ok_or_else(LookupError::not_found)
    }

    /// Find a document by the configured identity field.
    pub async fn by_id(&self, id: Option<&str>) -> LookupResult<Value> {
        let lookup = ById::parse(id)?;
        debug!(id = %lookup.id(), primary = %self.settings.primary_id_field, "Lookup by id");

        self.store
            .find_one(id_filter(&self.settings.primary_id_field, &lookup))
            .await?
            .map(into_json)
            .ok_or_else(LookupError::not_found)
    }

    /// Fetch one page sorted ascending on the identity field.
    pub async fn list(&self, request: PageRequest) -> LookupResult<ListResponse> {
        let docs = self
            .store
            .find_page(&self.settings.primary_id_field, request.skip(), request.take())
            .await?;

        let total = if request.include_total {
            Some(self.store.count().await?)
        } else {
            None
        };

        Ok(ListResponse {
            items: into_json_items(docs),
            total,
            page: request.page,
            page_size: request.page_size,
        })
    }

    /// Check that the store is reachable.
    pub async fn health(&self) -> HealthStatus {
        match self.store.ping().await {
            Ok(()) => HealthStatus { status: "ok" },
            Err(e) => {
                warn!(error = %e, "Health check failed");
                HealthStatus {
                    status: "unavailable",
                }
            }
        }
    }
}

fn to_fetch_error(err: LookupError) -> FetchError {
    let api = ApiError(err);
    let body = serde_json::to_string(&api.body()).unwrap_or_default();
    FetchError::Status {
        status: api.status().as_u16(),
        body,
    }
}

/// The table page's data source when it reads the store in-process.
#[async_trait]
impl LookupSource for LookupService {
    async fn fetch_list(&self, page: u64, page_size: u64) -> FetchResult<ListPage> {
        let response = self
            .list(PageRequest::new(page, page_size).with_total(true))
            .await
            .map_err(to_fetch_error)?;

        Ok(ListPage {
            items: response.items,
            total: response.total,
        })
    }

    async fn fetch_by_id(&self, id: &str) -> FetchResult<SearchPayload> {
        let doc = self.by_id(Some(id)).await.map_err(to_fetch_error)?;
        Ok(SearchPayload::from_value(doc))
    }
}

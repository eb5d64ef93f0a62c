//! HTTP handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use doclookup_query::{Meta, PageRequest};
use doclookup_table::page::{PageQuery, drive, render_page};
use doclookup_table::{Labels, LookupSource, TableController};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiResult;
use crate::service::{ListResponse, LookupService};

/// Settings of the server-rendered table page.
#[derive(Clone)]
pub struct TablePage {
    /// Where the page reads rows from.
    pub source: Arc<dyn LookupSource>,
    /// User-facing texts.
    pub labels: Labels,
    /// Initial rows per page.
    pub page_size: u64,
}

/// Shared state of every handler.
#[derive(Clone)]
pub struct AppState {
    /// Lookup operations.
    pub service: LookupService,
    /// Table page settings.
    pub table: Arc<TablePage>,
}

impl AppState {
    /// State whose table page reads the store in-process.
    pub fn new(service: LookupService) -> Self {
        let table = TablePage {
            source: Arc::new(service.clone()),
            labels: Labels::default(),
            page_size: doclookup_query::pagination::DEFAULT_PAGE_SIZE,
        };
        Self {
            service,
            table: Arc::new(table),
        }
    }

    /// Replace the table page settings.
    pub fn with_table(mut self, table: TablePage) -> Self {
        self.table = Arc::new(table);
        self
    }
}

/// Raw query pairs of a request.
///
/// A repeated key resolves to its first value.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(transparent)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// First value of `key`, if present.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn first_owned(&self, key: &str) -> Option<String> {
        self.first(key).map(str::to_string)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryPairs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// `GET /meta`
pub async fn meta(State(state): State<AppState>) -> Json<Meta> {
    Json(state.service.meta())
}

/// `GET /search/by-field?field=..&value=..`
pub async fn search_by_field(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> ApiResult<Json<Value>> {
    let doc = state
        .service
        .by_field(params.first("field"), params.first("value"))
        .await?;
    Ok(Json(doc))
}

/// `GET /search/by-id?id=..`
pub async fn search_by_id(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> ApiResult<Json<Value>> {
    let doc = state.service.by_id(params.first("id")).await?;
    Ok(Json(doc))
}

/// `GET /list?page=..&pageSize=..&includeTotal=..`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> ApiResult<Json<ListResponse>> {
    let request = PageRequest::from_params(
        params.first("page"),
        params.first("pageSize"),
        params.first("includeTotal"),
    );
    Ok(Json(state.service.list(request).await?))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let health = state.service.health().await;
    let status = if health.status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(health))
}

/// `GET /?id=..&page=..&pageSize=..&clear=..`
pub async fn table_page(
    State(state): State<AppState>,
    Query(params): Query<QueryPairs>,
) -> Html<String> {
    let query = PageQuery {
        id: params.first_owned("id"),
        page: params.first_owned("page"),
        page_size: params.first_owned("pageSize"),
        clear: params.first_owned("clear"),
    };
    let page = &state.table;
    let mut table = TableController::new(page.source.clone(), page.page_size)
        .with_labels(page.labels.clone())
        .with_identity_field(state.service.settings().primary_id_field.clone());

    drive(&mut table, &query).await;
    Html(render_page(table.view(), table.state(), table.labels()))
}

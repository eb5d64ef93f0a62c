//! Data sources for the table.
//!
//! [`LookupSource`] is what the controller fetches from. [`HttpSource`]
//! calls the list and by-id endpoints over HTTP with `reqwest`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::payload::{ListPage, SearchPayload};

/// Errors raised while fetching table data.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// An endpoint URL could not be parsed.
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl FetchError {
    /// Whether the endpoint answered with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// The status code, when the endpoint answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for fetches.
pub type FetchResult<T> = Result<T, FetchError>;

/// Where the table gets its rows.
#[async_trait]
pub trait LookupSource: Send + Sync {
    /// Fetch a list page, asking for the total row count.
    async fn fetch_list(&self, page: u64, page_size: u64) -> FetchResult<ListPage>;

    /// Search for a document by identifier.
    async fn fetch_by_id(&self, id: &str) -> FetchResult<SearchPayload>;
}

#[async_trait]
impl<T: LookupSource + ?Sized> LookupSource for Arc<T> {
    async fn fetch_list(&self, page: u64, page_size: u64) -> FetchResult<ListPage> {
        (**self).fetch_list(page, page_size).await
    }

    async fn fetch_by_id(&self, id: &str) -> FetchResult<SearchPayload> {
        (**self).fetch_by_id(id).await
    }
}

/// The two endpoint URLs the table calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// List endpoint.
    pub list_url: Url,
    /// By-id search endpoint.
    pub by_id_url: Url,
}

impl Endpoints {
    /// Parse both endpoint URLs.
    pub fn parse(list_url: &str, by_id_url: &str) -> FetchResult<Self> {
        Ok(Self {
            list_url: Url::parse(list_url)?,
            by_id_url: Url::parse(by_id_url)?,
        })
    }

    /// Endpoints of a lookup server at `base` (`{base}/list`, `{base}/search/by-id`).
    pub fn for_base(base: &str) -> FetchResult<Self> {
        let base = base.trim_end_matches('/');
        Self::parse(&format!("{base}/list"), &format!("{base}/search/by-id"))
    }

    /// List URL for a page, always requesting the total.
    pub fn list_page_url(&self, page: u64, page_size: u64) -> Url {
        let mut url = self.list_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("pageSize", &page_size.to_string())
            .append_pair("includeTotal", "true");
        url
    }

    /// By-id URL for an identifier.
    pub fn by_id_url(&self, id: &str) -> Url {
        let mut url = self.by_id_url.clone();
        url.query_pairs_mut().append_pair("id", id);
        url
    }
}

/// [`LookupSource`] calling the lookup endpoints over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpSource {
    /// Create a source with a default HTTP client.
    pub fn new(endpoints: Endpoints) -> Self {
        Self::with_client(reqwest::Client::new(), endpoints)
    }

    /// Create a source with a preconfigured HTTP client.
    pub fn with_client(http: reqwest::Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    /// The endpoints this source calls.
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json(&self, url: Url) -> FetchResult<Value> {
        debug!(url = %url, "Fetching table data");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl LookupSource for HttpSource {
    async fn fetch_list(&self, page: u64, page_size: u64) -> FetchResult<ListPage> {
        let body = self
            .get_json(self.endpoints.list_page_url(page, page_size))
            .await?;
        serde_json::from_value(body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn fetch_by_id(&self, id: &str) -> FetchResult<SearchPayload> {
        let body = self.get_json(self.endpoints.by_id_url(id)).await?;
        Ok(SearchPayload::from_value(body))
    }
}

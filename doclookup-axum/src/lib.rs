//! Axum endpoints for doclookup.
//!
//! This crate serves the lookup API over HTTP:
//!
//! - `GET /meta`: identity field and allow-list
//! - `GET /search/by-field?field=..&value=..`: lookup by an allow-listed field
//! - `GET /search/by-id?id=..`: lookup by the configured identity field
//! - `GET /list?page=..&pageSize=..&includeTotal=..`: sorted pages
//! - `GET /health`: store reachability
//! - `GET /`: the server-rendered table page
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use doclookup_axum::{AppState, LookupServer, LookupService, ServerConfig};
//! use doclookup_mongodb::{CollectionProvider, ConnectionEnv, MongoStore};
//! use doclookup_query::{LookupSettings, StdEnvSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = LookupSettings::from_env(&StdEnvSource);
//!     let provider = CollectionProvider::new(ConnectionEnv::from_env(&StdEnvSource))
//!         .with_secondary_unique_field(settings.secondary_unique_field.clone());
//!     let store = MongoStore::new(Arc::new(provider));
//!
//!     let service = LookupService::new(Arc::new(settings), Arc::new(store));
//!     LookupServer::new(ServerConfig::default(), AppState::new(service))
//!         .run()
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod service;

pub use error::{ApiError, ApiResult, ErrorBody, ServerError};
pub use handlers::{AppState, TablePage};
pub use routes::create_router;
pub use server::{DEFAULT_LISTEN, LookupServer, ServerConfig, build_app, shutdown_signal};
pub use service::{HealthStatus, ListResponse, LookupService};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{
        ApiError, AppState, LookupServer, LookupService, ServerConfig, ServerError, TablePage,
        create_router,
    };
    pub use doclookup_query::prelude::*;
}

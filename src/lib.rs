//! # doclookup
//!
//! A small read-only lookup service over a single MongoDB collection.
//!
//! doclookup provides:
//! - Lookups by the configured identity field, with ObjectId coercion for `_id`
//! - Lookups by any field on an environment-configured allow-list
//! - A `/meta` endpoint describing how the collection can be searched
//! - Sorted list pages and a server-rendered table that browses them
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use doclookup::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = LookupSettings::from_env(&StdEnvSource);
//!     let provider = CollectionProvider::new(ConnectionEnv::from_env(&StdEnvSource))
//!         .with_secondary_unique_field(settings.secondary_unique_field.clone());
//!     let store = MongoStore::new(Arc::new(provider));
//!
//!     let service = LookupService::new(Arc::new(settings), Arc::new(store));
//!     let doc = service.by_id(Some("64b7f0c2a1b2c3d4e5f60718")).await?;
//!     println!("{doc}");
//!
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Settings, request validation, pagination and errors.
pub mod query {
    pub use doclookup_query::*;
}

/// MongoDB connection, filters and document stores.
pub mod mongodb {
    pub use doclookup_mongodb::*;
}

/// The paginated table renderer.
pub mod table {
    pub use doclookup_table::*;
}

/// HTTP endpoints and server.
pub mod server {
    pub use doclookup_axum::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use doclookup_axum::{AppState, LookupServer, LookupService, ServerConfig, TablePage};
    pub use doclookup_mongodb::{
        CollectionProvider, ConnectionEnv, DocumentStore, MemoryStore, MongoStore,
    };
    pub use doclookup_query::{
        AllowList, ByField, ById, LookupError, LookupSettings, PageRequest, StdEnvSource,
    };
    pub use doclookup_table::{Endpoints, HttpSource, Labels, TableController};
}

// Re-export key types at the crate root
pub use doclookup_axum::LookupService;
pub use doclookup_query::{LookupError, LookupSettings};

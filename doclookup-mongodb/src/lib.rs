//! # doclookup-mongodb
//!
//! MongoDB access for the doclookup service.
//!
//! This crate provides:
//! - Connection configuration with a small bounded pool and a short
//!   server selection timeout
//! - A [`CollectionProvider`] that connects once and hands out the same
//!   collection handle for the process lifetime
//! - Best-effort background indexing of a secondary field
//! - Lookup filter construction, including ObjectId coercion for `_id`
//! - The [`DocumentStore`] seam used by the HTTP handlers
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use doclookup_mongodb::prelude::*;
//! use doclookup_query::{ById, StdEnvSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = CollectionProvider::new(ConnectionEnv::from_env(&StdEnvSource));
//!     let store = MongoStore::new(Arc::new(provider));
//!
//!     let lookup = ById::parse(Some("64b7f0c2a1b2c3d4e5f60718"))?;
//!     let doc = store.find_one(id_filter("_id", &lookup)).await?;
//!     println!("{:?}", doc);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod filter;
pub mod store;

pub use bson::oid::ObjectId;
pub use bson::{Bson, Document, doc};
pub use client::{CollectionProvider, Connected, MongoClient, spawn_background_index};
pub use config::{CollectionConfig, ConnectionEnv, MongoConfig};
pub use document::{DocumentExt, into_json, into_json_items};
pub use error::{MongoError, MongoResult};
pub use filter::{FilterBuilder, field_filter, id_filter, resolve_id_filter};
pub use store::{DocumentStore, MemoryStore, MongoStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::client::{CollectionProvider, MongoClient};
    pub use crate::config::{ConnectionEnv, MongoConfig};
    pub use crate::document::DocumentExt;
    pub use crate::error::{MongoError, MongoResult};
    pub use crate::filter::{FilterBuilder, field_filter, id_filter};
    pub use crate::store::{DocumentStore, MemoryStore, MongoStore};
    pub use bson::oid::ObjectId;
    pub use bson::{Bson, Document, doc};
}

//! CLI command implementations.

pub mod lookup;
pub mod meta;
pub mod serve;
pub mod version;

use std::sync::Arc;

use doclookup_axum::LookupService;
use doclookup_mongodb::{CollectionProvider, ConnectionEnv, MongoStore};
use doclookup_query::{EnvSource, LookupSettings};

/// Build the lookup service from environment settings.
///
/// Nothing connects here; the first lookup opens the connection.
pub(crate) fn build_service(env: &impl EnvSource) -> LookupService {
    let settings = LookupSettings::from_env(env);
    let provider = CollectionProvider::new(ConnectionEnv::from_env(env))
        .with_secondary_unique_field(settings.secondary_unique_field.clone());

    LookupService::new(
        Arc::new(settings),
        Arc::new(MongoStore::new(Arc::new(provider))),
    )
}

//! # doclookup-query
//!
//! Store-independent pieces of the doclookup service:
//!
//! - Process-wide [`LookupSettings`] read from the environment
//! - The field [`AllowList`] that gates by-field lookups
//! - Validation of identifier and by-field requests ([`ById`], [`ByField`])
//! - Page-based pagination math ([`PageRequest`], [`PageRange`])
//! - The [`LookupError`] taxonomy shared by every layer
//! - Logging initialization
//!
//! ## Example
//!
//! ```rust
//! use doclookup_query::prelude::*;
//!
//! let env = MapEnvSource::new()
//!     .set("PRIMARY_ID_FIELD", "code")
//!     .set("ALLOWED_FIELDS", "email");
//! let settings = LookupSettings::from_env(&env);
//!
//! let lookup = ByField::parse(Some("email"), Some("ana@example.com"), &settings.allowed_fields)?;
//! assert_eq!(lookup.field(), "email");
//! # Ok::<(), LookupError>(())
//! ```

pub mod env;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod pagination;
pub mod settings;

pub use env::{EnvSource, MapEnvSource, StdEnvSource};
pub use error::{ErrorCode, LookupError, LookupResult};
pub use lookup::{ByField, ById};
pub use pagination::{PageRange, PageRequest};
pub use settings::{AllowList, DEFAULT_ID_FIELD, LookupSettings, Meta};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::env::{EnvSource, MapEnvSource, StdEnvSource};
    pub use crate::error::{ErrorCode, LookupError, LookupResult};
    pub use crate::lookup::{ByField, ById};
    pub use crate::pagination::{PageRange, PageRequest};
    pub use crate::settings::{AllowList, LookupSettings, Meta};
}

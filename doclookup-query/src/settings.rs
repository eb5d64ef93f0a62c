//! Process-wide lookup settings.
//!
//! Settings are read once at startup and shared read-only for the lifetime
//! of the process.
//!
//! ```rust
//! use doclookup_query::{LookupSettings, MapEnvSource};
//!
//! let env = MapEnvSource::new().set("ALLOWED_FIELDS", "email, code,,email");
//! let settings = LookupSettings::from_env(&env);
//!
//! assert_eq!(settings.primary_id_field, "_id");
//! assert_eq!(settings.allowed_fields.joined(), "email, code");
//! ```

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::env::EnvSource;

/// Name of the database's native identity field.
pub const DEFAULT_ID_FIELD: &str = "_id";

/// Environment variable naming the primary identifier field.
pub const PRIMARY_ID_FIELD_VAR: &str = "PRIMARY_ID_FIELD";
/// Environment variable holding the comma-separated allow-list.
pub const ALLOWED_FIELDS_VAR: &str = "ALLOWED_FIELDS";
/// Environment variable naming the field that gets a background index.
pub const SECONDARY_UNIQUE_FIELD_VAR: &str = "SECONDARY_UNIQUE_FIELD";

/// Set of field names that may be used in by-field lookups.
///
/// Insertion order is preserved so error messages and metadata list the
/// fields in the order they were configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowList {
    fields: IndexSet<String>,
}

impl AllowList {
    /// Create an empty allow-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list, trimming entries and dropping blanks.
    pub fn parse(raw: &str) -> Self {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Check whether a field is allowed.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    /// Number of allowed fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field is allowed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the allowed fields in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// The fields joined with `", "`.
    pub fn joined(&self) -> String {
        self.iter().collect::<Vec<_>>().join(", ")
    }
}

impl<S: Into<String>> FromIterator<S> for AllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Lookup settings shared by every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSettings {
    /// Field used by identifier lookups.
    pub primary_id_field: String,
    /// Fields accepted by by-field lookups.
    pub allowed_fields: AllowList,
    /// Field that receives a best-effort background index.
    pub secondary_unique_field: Option<String>,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            primary_id_field: DEFAULT_ID_FIELD.to_string(),
            allowed_fields: AllowList::new(),
            secondary_unique_field: None,
        }
    }
}

impl LookupSettings {
    /// Read settings from an environment source.
    pub fn from_env(env: &impl EnvSource) -> Self {
        let settings = Self {
            primary_id_field: env
                .get_trimmed(PRIMARY_ID_FIELD_VAR)
                .unwrap_or_else(|| DEFAULT_ID_FIELD.to_string()),
            allowed_fields: env
                .get(ALLOWED_FIELDS_VAR)
                .map(|raw| AllowList::parse(&raw))
                .unwrap_or_default(),
            secondary_unique_field: env.get_trimmed(SECONDARY_UNIQUE_FIELD_VAR),
        };

        info!(
            primary_id_field = %settings.primary_id_field,
            allowed_fields = settings.allowed_fields.len(),
            secondary_unique_field = ?settings.secondary_unique_field,
            "Lookup settings loaded"
        );

        settings
    }

    /// Set the primary identifier field.
    pub fn with_primary_id_field(mut self, field: impl Into<String>) -> Self {
        self.primary_id_field = field.into();
        self
    }

    /// Set the allowed fields.
    pub fn with_allowed_fields<S: Into<String>>(
        mut self,
        fields: impl IntoIterator<Item = S>,
    ) -> Self {
        self.allowed_fields = fields.into_iter().collect();
        self
    }

    /// Set the secondary unique field.
    pub fn with_secondary_unique_field(mut self, field: impl Into<String>) -> Self {
        self.secondary_unique_field = Some(field.into());
        self
    }

    /// Whether identifier lookups target the native identity field.
    pub fn uses_default_id(&self) -> bool {
        self.primary_id_field == DEFAULT_ID_FIELD
    }

    /// Metadata exposed to clients.
    pub fn meta(&self) -> Meta {
        Meta {
            primary_id_field: self.primary_id_field.clone(),
            allowed_fields: self.allowed_fields.iter().map(str::to_string).collect(),
        }
    }
}

/// Metadata payload describing how the collection can be searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Field used by identifier lookups.
    pub primary_id_field: String,
    /// Fields accepted by by-field lookups.
    pub allowed_fields: Vec<String>,
}

//! Validation of lookup requests.
//!
//! Raw query parameters are turned into a validated lookup before anything
//! reaches the database. A by-field lookup can only be constructed for a
//! field that is in the allow-list.
//!
//! ```rust
//! use doclookup_query::{AllowList, ByField, ById};
//!
//! let allowed = AllowList::parse("email");
//!
//! let by_field = ByField::parse(Some("email"), Some(" ana@example.com "), &allowed).unwrap();
//! assert_eq!(by_field.value(), "ana@example.com");
//!
//! assert!(ByField::parse(Some("password"), Some("x"), &allowed).is_err());
//! assert!(ById::parse(Some("   ")).is_err());
//! ```

use crate::error::{LookupError, LookupResult};
use crate::settings::AllowList;

/// Message returned when a by-field request misses a parameter.
pub const MISSING_FIELD_OR_VALUE: &str = "Provide 'field' and 'value'";
/// Message returned when a by-id request misses the identifier.
pub const MISSING_ID: &str = "Missing 'id'";

fn trimmed(raw: Option<&str>) -> &str {
    raw.map(str::trim).unwrap_or_default()
}

/// A validated identifier lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ById {
    id: String,
}

impl ById {
    /// Validate the raw `id` parameter.
    pub fn parse(id: Option<&str>) -> LookupResult<Self> {
        let id = trimmed(id);
        if id.is_empty() {
            return Err(LookupError::missing_parameter(MISSING_ID));
        }

        Ok(Self { id: id.to_string() })
    }

    /// The trimmed identifier.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A validated single-field equality lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByField {
    field: String,
    value: String,
}

impl ByField {
    /// Validate the raw `field` and `value` parameters against the allow-list.
    pub fn parse(
        field: Option<&str>,
        value: Option<&str>,
        allowed: &AllowList,
    ) -> LookupResult<Self> {
        let field = trimmed(field);
        let value = trimmed(value);

        if field.is_empty() || value.is_empty() {
            return Err(LookupError::missing_parameter(MISSING_FIELD_OR_VALUE));
        }

        if !allowed.contains(field) {
            return Err(LookupError::field_not_allowed(&allowed.joined()));
        }

        Ok(Self {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    /// The allow-listed field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The trimmed value to match exactly.
    pub fn value(&self) -> &str {
        &self.value
    }
}

//! MongoDB filter building for lookups.
//!
//! Lookups only ever produce a single equality constraint. Identifier
//! lookups on the native `_id` field reinterpret 24-character hex input as
//! an ObjectId, since `_id` is usually stored in that binary form and a
//! plain string would never match.

use bson::{Bson, Document, oid::ObjectId};
use doclookup_query::{ByField, ById, DEFAULT_ID_FIELD};

/// Length of a hex-encoded ObjectId.
const OBJECT_ID_HEX_LEN: usize = 24;

/// Builder for MongoDB filter documents.
///
/// # Example
///
/// ```rust
/// use doclookup_mongodb::FilterBuilder;
///
/// let filter = FilterBuilder::new().eq("email", "ana@example.com").build();
/// assert_eq!(filter.get_str("email").unwrap(), "ana@example.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterBuilder {
    doc: Document,
}

impl FilterBuilder {
    /// Create a new empty filter builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality condition.
    pub fn eq(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.doc.insert(field, value.into());
        self
    }

    /// Add an ObjectId filter on the `_id` field.
    pub fn by_id(mut self, id: ObjectId) -> Self {
        self.doc.insert(DEFAULT_ID_FIELD, id);
        self
    }

    /// Build the filter document.
    pub fn build(self) -> Document {
        self.doc
    }
}

/// Whether the input has the shape of a hex-encoded ObjectId.
pub fn looks_like_object_id(raw: &str) -> bool {
    raw.len() == OBJECT_ID_HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Build the filter for a by-field lookup: exact string equality.
pub fn field_filter(lookup: &ByField) -> Document {
    FilterBuilder::new()
        .eq(lookup.field(), lookup.value())
        .build()
}

/// Build the filter for an identifier lookup.
pub fn id_filter(primary_id_field: &str, lookup: &ById) -> Document {
    resolve_id_filter(primary_id_field, lookup.id(), |raw| ObjectId::parse_str(raw))
}

/// Build an identifier filter with a custom ObjectId constructor.
///
/// When `primary_id_field` is `_id` and `raw` looks like an ObjectId, the
/// constructor is tried; on success the filter matches the ObjectId,
/// otherwise it silently falls back to raw string equality.
pub fn resolve_id_filter<E>(
    primary_id_field: &str,
    raw: &str,
    parse: impl FnOnce(&str) -> Result<ObjectId, E>,
) -> Document {
    if primary_id_field == DEFAULT_ID_FIELD && looks_like_object_id(raw) {
        if let Ok(oid) = parse(raw) {
            return FilterBuilder::new().by_id(oid).build();
        }
    }

    FilterBuilder::new().eq(primary_id_field, raw).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use doclookup_query::AllowList;
    use pretty_assertions::assert_eq;

    const HEX: &str = "64b7f0c2a1b2c3d4e5f60718";

    fn by_id(raw: &str) -> ById {
        ById::parse(Some(raw)).unwrap()
    }

    #[test]
    fn test_hex_shape() {
        assert!(looks_like_object_id(HEX));
        assert!(looks_like_object_id("64B7F0C2A1B2C3D4E5F60718"));
        assert!(!looks_like_object_id("64b7f0c2a1b2c3d4e5f6071"));
        assert!(!looks_like_object_id("64b7f0c2a1b2c3d4e5f6071z"));
        assert!(!looks_like_object_id("A-1001"));
        assert!(!looks_like_object_id("64b7f0c2a1b2c3d4e5f60718\n"));
        assert!(!looks_like_object_id("64b7f0c2a1b2c3d4e5f6071\u{e9}"));
    }

    #[test]
    fn test_default_id_uses_object_id() {
        let filter = id_filter("_id", &by_id(HEX));
        let oid = ObjectId::parse_str(HEX).unwrap();
        assert_eq!(filter, doc! { "_id": oid });
    }

    #[test]
    fn test_default_id_non_hex_stays_string() {
        let filter = id_filter("_id", &by_id("A-1001"));
        assert_eq!(filter, doc! { "_id": "A-1001" });
    }

    #[test]
    fn test_failed_construction_falls_back_to_string() {
        let filter = resolve_id_filter("_id", HEX, |_| Err("rejected"));
        assert_eq!(filter, doc! { "_id": HEX });
    }

    #[test]
    fn test_custom_primary_field_never_coerces() {
        let filter = id_filter("studentId", &by_id(HEX));
        assert_eq!(filter, doc! { "studentId": HEX });
    }

    #[test]
    fn test_field_filter_is_exact_string() {
        let allowed = AllowList::parse("code");
        let lookup = ByField::parse(Some("code"), Some("0042"), &allowed).unwrap();

        assert_eq!(field_filter(&lookup), doc! { "code": "0042" });
    }
}

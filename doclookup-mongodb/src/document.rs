//! Document conversion utilities.
//!
//! Documents leave the service as relaxed extended JSON: ObjectIds become
//! `{"$oid": "..."}` and dates become `{"$date": "<RFC 3339>"}`, which is
//! what the table renderer knows how to display.

use bson::{Bson, Document};
use serde_json::Value;

/// Extension trait for BSON documents.
pub trait DocumentExt {
    /// Whether every key of `filter` is present with an equal value.
    fn matches(&self, filter: &Document) -> bool;

    /// Convert to relaxed extended JSON.
    fn to_extended_json(&self) -> Value;
}

impl DocumentExt for Document {
    fn matches(&self, filter: &Document) -> bool {
        filter
            .iter()
            .all(|(key, expected)| self.get(key) == Some(expected))
    }

    fn to_extended_json(&self) -> Value {
        Bson::Document(self.clone()).into_relaxed_extjson()
    }
}

/// Convert a document to relaxed extended JSON, consuming it.
pub fn into_json(doc: Document) -> Value {
    Bson::Document(doc).into_relaxed_extjson()
}

/// Convert a batch of documents to relaxed extended JSON.
pub fn into_json_items(docs: Vec<Document>) -> Vec<Value> {
    docs.into_iter().map(into_json).collect()
}

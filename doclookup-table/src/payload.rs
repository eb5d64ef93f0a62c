//! Response payload shapes consumed by the table.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The body of a by-id search response.
///
/// The endpoint may wrap its result as `{ "item": .. }` or
/// `{ "document": .. }`, or return the document bare. Wrappers are checked
/// in that order and a `null` wrapper counts as absent.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPayload {
    /// `{ "item": .. }`
    Item(Value),
    /// `{ "document": .. }`
    Document(Value),
    /// The body itself.
    Bare(Value),
}

impl SearchPayload {
    /// Classify a response body.
    pub fn from_value(body: Value) -> Self {
        if let Value::Object(map) = &body {
            if let Some(item) = map.get("item").filter(|v| !v.is_null()) {
                return Self::Item(item.clone());
            }
            if let Some(document) = map.get("document").filter(|v| !v.is_null()) {
                return Self::Document(document.clone());
            }
        }
        Self::Bare(body)
    }

    /// The extracted result.
    pub fn value(&self) -> &Value {
        match self {
            Self::Item(v) | Self::Document(v) | Self::Bare(v) => v,
        }
    }

    /// Rows to display: an array as-is, `null` as nothing, anything else as one row.
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Item(v) | Self::Document(v) | Self::Bare(v) => match v {
                Value::Array(items) => items,
                Value::Null => Vec::new(),
                other => vec![other],
            },
        }
    }
}

/// The body of a list page response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage {
    /// Rows of the page.
    #[serde(default)]
    pub items: Vec<Value>,
    /// Total rows, when requested.
    #[serde(default)]
    pub total: Option<u64>,
}

//! Table rendering.
//!
//! Turns a page of JSON items plus the pagination state into a
//! [`TableView`]: the column headers, formatted cell text and the status
//! line under the table. Columns are derived from the first item, with the
//! identity field moved to the front when present.

use doclookup_query::PageRange;
use serde::Serialize;
use serde_json::Value;

use crate::format::format_value;
use crate::labels::Labels;
use crate::state::{Mode, TableState};

/// A rendered table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    /// Header cells.
    pub columns: Vec<String>,
    /// Body rows, one formatted cell per column.
    pub rows: Vec<Vec<String>>,
    /// Pagination text under the table.
    pub page_info: String,
    /// Status message.
    pub status: String,
    /// Whether the "previous" button is disabled.
    pub prev_disabled: bool,
    /// Whether the "next" button is disabled.
    pub next_disabled: bool,
}

impl TableView {
    /// A single error row showing the failure detail, with no pagination text.
    pub fn error(labels: &Labels, detail: impl Into<String>) -> Self {
        Self {
            columns: vec![labels.error.to_string()],
            rows: vec![vec![detail.into()]],
            ..Self::default()
        }
    }

    /// Copy the pager enablement from the state.
    pub fn sync_pager(&mut self, state: &TableState) {
        self.prev_disabled = state.prev_disabled();
        self.next_disabled = state.next_disabled();
    }

    /// Whether the table has no body rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Column headers for a page of items.
///
/// Keys come from the first object item in their natural order; the
/// identity field is moved to the first position when present.
pub fn build_columns(items: &[Value], identity_field: &str) -> Vec<String> {
    let Some(Value::Object(first)) = items.first() else {
        return Vec::new();
    };

    let mut columns = Vec::with_capacity(first.len());
    if first.contains_key(identity_field) {
        columns.push(identity_field.to_string());
    }
    columns.extend(
        first
            .keys()
            .filter(|key| key.as_str() != identity_field)
            .cloned(),
    );
    columns
}

fn build_row(item: &Value, columns: &[String]) -> Vec<String> {
    match item {
        Value::Object(map) => columns
            .iter()
            .map(|col| map.get(col).map(format_value).unwrap_or_default())
            .collect(),
        other => vec![format_value(other)],
    }
}

/// Render items for the current state.
pub fn render_table(
    state: &TableState,
    items: &[Value],
    total: Option<u64>,
    labels: &Labels,
    identity_field: &str,
) -> TableView {
    let mut view = TableView::default();

    if items.is_empty() {
        view.columns = vec![labels.no_data.to_string()];
        view.page_info = match state.mode {
            Mode::Search => format!(
                "{}: \u{201c}{}\u{201d} \u{2022} 0 {}",
                labels.search_by_id, state.last_id, labels.rows
            ),
            Mode::List => format!("{} {} \u{2022} 0 {}", labels.page, state.page, labels.rows),
        };
        view.sync_pager(state);
        return view;
    }

    view.columns = build_columns(items, identity_field);
    view.rows = items
        .iter()
        .map(|item| build_row(item, &view.columns))
        .collect();

    view.page_info = match state.mode {
        Mode::Search => format!(
            "{}: \u{201c}{}\u{201d} \u{2022} {} {}",
            labels.search_by_id,
            state.last_id,
            items.len(),
            labels.rows_maybe_plural
        ),
        Mode::List => match total.and_then(|t| PageRange::compute(state.page, state.page_size, t)) {
            Some(range) => format!(
                "{} {} \u{2022} {}\u{2013}{} {} {}",
                labels.page, state.page, range.start, range.end, labels.of, range.total
            ),
            None => format!("{} {}", labels.page, state.page),
        },
    };
    view.sync_pager(state);
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn list_state(page: u64, total: Option<u64>) -> TableState {
        let mut state = TableState::new(25);
        state.page = page;
        state.total = total;
        state
    }

    #[test]
    fn test_identity_column_first() {
        let items = vec![json!({ "name": "Ana", "_id": { "$oid": "64b7f0c2a1b2c3d4e5f60718" }, "age": 30 })];
        assert_eq!(build_columns(&items, "_id"), vec!["_id", "name", "age"]);
        assert_eq!(build_columns(&items, "code"), vec!["name", "_id", "age"]);
        assert!(build_columns(&[], "_id").is_empty());
    }

    #[test]
    fn test_rows_follow_first_item_columns() {
        let items = vec![
            json!({ "_id": "a", "tags": ["x", "y"], "active": true }),
            json!({ "_id": "b", "extra": 1 }),
        ];
        let view = render_table(&list_state(1, None), &items, None, &Labels::english(), "_id");

        assert_eq!(view.columns, vec!["_id", "tags", "active"]);
        assert_eq!(
            view.rows,
            vec![
                vec!["a".to_string(), "x, y".to_string(), "true".to_string()],
                vec!["b".to_string(), String::new(), String::new()],
            ]
        );
        assert_eq!(view.page_info, "Page 1");
    }

    #[test]
    fn test_last_page_range_text() {
        let state = list_state(3, Some(57));
        let items: Vec<Value> = (53..=57).map(|n| json!({ "_id": n })).collect();

        let view = render_table(&state, &items, Some(57), &Labels::english(), "_id");
        assert_eq!(view.page_info, "Page 3 \u{2022} 53\u{2013}57 of 57");
        assert!(!view.prev_disabled);
        assert!(view.next_disabled);

        let view = render_table(&state, &items, Some(57), &Labels::spanish(), "_id");
        assert_eq!(view.page_info, "Página 3 \u{2022} 53\u{2013}57 de 57");
    }

    #[test]
    fn test_empty_list_page() {
        let view = render_table(&list_state(2, Some(25)), &[], Some(25), &Labels::spanish(), "_id");
        assert_eq!(view.columns, vec!["Sin datos"]);
        assert!(view.is_empty());
        assert_eq!(view.page_info, "Página 2 \u{2022} 0 filas");
    }

    #[test]
    fn test_search_page_info() {
        let mut state = TableState::new(25);
        state.submit_search("abc");

        let view = render_table(&state, &[], Some(0), &Labels::spanish(), "_id");
        assert_eq!(view.page_info, "Búsqueda por ID: \u{201c}abc\u{201d} \u{2022} 0 filas");
        assert!(view.prev_disabled && view.next_disabled);

        let items = vec![json!({ "_id": "abc" })];
        let view = render_table(&state, &items, Some(1), &Labels::spanish(), "_id");
        assert_eq!(view.page_info, "Búsqueda por ID: \u{201c}abc\u{201d} \u{2022} 1 fila(s)");
    }

    #[test]
    fn test_error_view() {
        let view = TableView::error(&Labels::english(), "HTTP 500: boom");
        assert_eq!(view.columns, vec!["Error"]);
        assert_eq!(view.rows, vec![vec!["HTTP 500: boom".to_string()]]);
        assert!(view.page_info.is_empty());
    }
}

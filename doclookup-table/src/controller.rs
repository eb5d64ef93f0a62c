//! The table controller: state transitions plus the fetches they trigger.

use tracing::warn;

use crate::labels::Labels;
use crate::render::{TableView, render_table};
use crate::source::LookupSource;
use crate::state::{Fetch, LoadingGuard, TableState};

/// Drives a [`TableState`] against a [`LookupSource`] and keeps the
/// rendered [`TableView`] current.
pub struct TableController<S> {
    source: S,
    state: TableState,
    view: TableView,
    labels: Labels,
    identity_field: String,
}

impl<S: LookupSource> TableController<S> {
    /// Create a controller listing the first page.
    pub fn new(source: S, page_size: u64) -> Self {
        let state = TableState::new(page_size);
        let mut view = TableView::default();
        view.sync_pager(&state);

        Self {
            source,
            state,
            view,
            labels: Labels::default(),
            identity_field: doclookup_query::DEFAULT_ID_FIELD.to_string(),
        }
    }

    /// Use different labels.
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Set the field shown in the first column.
    pub fn with_identity_field(mut self, field: impl Into<String>) -> Self {
        self.identity_field = field.into();
        self
    }

    /// Current state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Mutable access to the state, for restoring a page from a request.
    pub fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }

    /// Current view.
    pub fn view(&self) -> &TableView {
        &self.view
    }

    /// Labels in use.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Fetch and render the current list page.
    ///
    /// On failure the table shows a single error row with the failure
    /// detail and the pagination text is cleared.
    pub async fn load_list_page(&mut self) -> &TableView {
        let mut state = LoadingGuard::acquire(&mut self.state);
        self.view.status = self.labels.loading.to_string();

        match self.source.fetch_list(state.page, state.page_size).await {
            Ok(page) => {
                state.total = page.total;
                self.view = render_table(
                    &state,
                    &page.items,
                    page.total,
                    &self.labels,
                    &self.identity_field,
                );
                self.view.status = self.labels.ready.to_string();
            }
            Err(e) => {
                warn!(error = %e, page = state.page, "Failed to load list page");
                self.view = TableView::error(&self.labels, e.to_string());
                self.view.status = self.labels.load_failed.to_string();
            }
        }

        drop(state);
        self.view.sync_pager(&self.state);
        &self.view
    }

    /// Fetch and render the result of an identifier search.
    ///
    /// A non-success response renders an empty table before the failure is
    /// reported in the status line.
    pub async fn search_by_id(&mut self, id: &str) -> &TableView {
        let mut state = LoadingGuard::acquire(&mut self.state);
        self.view.status = self.labels.loading.to_string();

        match self.source.fetch_by_id(id).await {
            Ok(payload) => {
                let items = payload.into_items();
                let count = items.len() as u64;
                state.total = Some(count);
                self.view = render_table(
                    &state,
                    &items,
                    Some(count),
                    &self.labels,
                    &self.identity_field,
                );
                self.view.status = self.labels.ready.to_string();
            }
            Err(e) => {
                warn!(error = %e, id = %id, "Search by id failed");
                if e.is_status() {
                    self.view = render_table(
                        &state,
                        &[],
                        Some(0),
                        &self.labels,
                        &self.identity_field,
                    );
                }
                self.view.status = self.labels.search_failed.to_string();
            }
        }

        drop(state);
        self.view.sync_pager(&self.state);
        &self.view
    }

    /// Submit the search form. Blank input is ignored.
    pub async fn submit_search(&mut self, raw: &str) -> &TableView {
        if self.state.submit_search(raw) {
            let id = self.state.last_id.clone();
            return self.search_by_id(&id).await;
        }
        &self.view
    }

    /// Leave search mode and show the first list page.
    pub async fn clear(&mut self) -> &TableView {
        self.state.clear();
        self.load_list_page().await
    }

    /// Change the page size and show the first list page.
    pub async fn change_page_size(&mut self, page_size: u64) -> &TableView {
        self.state.set_page_size(page_size);
        self.load_list_page().await
    }

    /// Show the next list page.
    pub async fn next_page(&mut self) -> &TableView {
        if self.state.next_page() {
            return self.load_list_page().await;
        }
        &self.view
    }

    /// Show the previous list page.
    pub async fn prev_page(&mut self) -> &TableView {
        if self.state.prev_page() {
            return self.load_list_page().await;
        }
        &self.view
    }

    /// Fetch again whatever the table currently shows.
    pub async fn reload(&mut self) -> &TableView {
        match self.state.reload() {
            Fetch::ListPage => self.load_list_page().await,
            Fetch::ById(id) => self.search_by_id(&id).await,
            Fetch::Nothing => &self.view,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::payload::{ListPage, SearchPayload};
    use crate::source::{FetchError, FetchResult};
    use crate::state::Mode;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    /// Serves `total` numbered rows and records every call.
    struct FakeSource {
        total: u64,
        by_id: Mutex<Option<FetchResult<Value>>>,
        calls: Mutex<Vec<String>>,
        fail_list: bool,
    }

    impl FakeSource {
        fn with_rows(total: u64) -> Self {
            Self {
                total,
                by_id: Mutex::new(None),
                calls: Mutex::new(Vec::new()),
                fail_list: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail_list: true,
                ..Self::with_rows(0)
            }
        }

        fn answer_by_id(self, result: FetchResult<Value>) -> Self {
            *self.by_id.lock().unwrap() = Some(result);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LookupSource for FakeSource {
        async fn fetch_list(&self, page: u64, page_size: u64) -> FetchResult<ListPage> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("list {page} {page_size}"));
            if self.fail_list {
                return Err(FetchError::Status {
                    status: 500,
                    body: "boom".to_string(),
                });
            }

            let start = (page - 1) * page_size + 1;
            let end = (page * page_size).min(self.total);
            Ok(ListPage {
                items: (start..=end).map(|n| json!({ "n": n, "_id": n })).collect(),
                total: Some(self.total),
            })
        }

        async fn fetch_by_id(&self, id: &str) -> FetchResult<SearchPayload> {
            self.calls.lock().unwrap().push(format!("id {id}"));
            match self.by_id.lock().unwrap().take() {
                Some(Ok(body)) => Ok(SearchPayload::from_value(body)),
                Some(Err(e)) => Err(e),
                None => Err(FetchError::Decode("no answer".to_string())),
            }
        }
    }

    #[tokio::test]
    async fn test_walks_to_last_page() {
        let mut table = TableController::new(FakeSource::with_rows(57), 25)
            .with_labels(Labels::english());

        table.load_list_page().await;
        assert_eq!(table.view().page_info, "Page 1 \u{2022} 1\u{2013}25 of 57");
        assert!(table.view().prev_disabled);

        table.next_page().await;
        let view = table.next_page().await;
        assert_eq!(view.page_info, "Page 3 \u{2022} 53\u{2013}57 of 57");
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.columns, vec!["_id", "n"]);
        assert!(!view.prev_disabled);
        assert!(view.next_disabled);
        assert_eq!(view.status, "Ready");
        assert!(!table.state().loading);
    }

    #[tokio::test]
    async fn test_loading_cleared_after_failure() {
        let mut table = TableController::new(FakeSource::failing(), 25);

        let view = table.load_list_page().await;
        assert_eq!(view.columns, vec!["Error"]);
        assert_eq!(view.rows, vec![vec!["HTTP 500: boom".to_string()]]);
        assert!(view.page_info.is_empty());
        assert_eq!(view.status, "Error al cargar");
        assert!(!table.state().loading);
    }

    #[tokio::test]
    async fn test_search_accepts_each_payload_shape() {
        for body in [
            json!({ "item": { "_id": "a1", "name": "Ana" } }),
            json!({ "document": { "_id": "a1", "name": "Ana" } }),
            json!({ "_id": "a1", "name": "Ana" }),
        ] {
            let source = FakeSource::with_rows(0).answer_by_id(Ok(body));
            let mut table = TableController::new(source, 25);

            let view = table.submit_search(" a1 ").await;
            assert_eq!(view.columns, vec!["_id", "name"]);
            assert_eq!(view.rows, vec![vec!["a1".to_string(), "Ana".to_string()]]);
            assert!(view.prev_disabled && view.next_disabled);
            assert_eq!(table.state().total, Some(1));
            assert_eq!(table.state().mode, Mode::Search);
        }
    }

    #[tokio::test]
    async fn test_search_not_found_renders_empty_table() {
        let source = FakeSource::with_rows(0).answer_by_id(Err(FetchError::Status {
            status: 404,
            body: r#"{"error":"Not found"}"#.to_string(),
        }));
        let mut table = TableController::new(source, 25);

        let view = table.submit_search("nope").await;
        assert_eq!(view.columns, vec!["Sin datos"]);
        assert_eq!(view.page_info, "Búsqueda por ID: \u{201c}nope\u{201d} \u{2022} 0 filas");
        assert_eq!(view.status, "Error al buscar");
        assert!(!table.state().loading);
    }

    #[tokio::test]
    async fn test_blank_search_fetches_nothing() {
        let mut table = TableController::new(FakeSource::with_rows(3), 25);
        table.submit_search("   ").await;
        assert!(table.source.calls().is_empty());
    }

    #[tokio::test]
    async fn test_clear_and_page_size_return_to_list() {
        let source = FakeSource::with_rows(30).answer_by_id(Ok(json!({ "_id": 1 })));
        let mut table = TableController::new(source, 25);

        table.submit_search("1").await;
        table.change_page_size(10).await;
        assert_eq!(table.state().mode, Mode::List);
        assert_eq!(table.state().page, 1);

        table.next_page().await;
        table.clear().await;
        assert_eq!(
            table.source.calls(),
            vec!["id 1", "list 1 10", "list 2 10", "list 1 10"]
        );
    }

    #[tokio::test]
    async fn test_reload_repeats_last_search() {
        let source = FakeSource::with_rows(0).answer_by_id(Ok(json!(null)));
        let mut table = TableController::new(source, 25);

        table.submit_search("x").await;
        table.reload().await;
        assert_eq!(table.source.calls(), vec!["id x", "id x"]);
        assert_eq!(table.view().status, "Error al buscar");
    }

    #[tokio::test]
    async fn test_prev_on_first_page_is_noop() {
        let mut table = TableController::new(FakeSource::with_rows(5), 25);
        table.prev_page().await;
        assert!(table.source.calls().is_empty());
    }
}

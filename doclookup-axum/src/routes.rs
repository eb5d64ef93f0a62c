//! Route definitions.

use axum::Router;
use axum::routing::get;

use crate::handlers::{self, AppState};

/// Create the router with every endpoint.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::table_page))
        .route("/meta", get(handlers::meta))
        .route("/search/by-field", get(handlers::search_by_field))
        .route("/search/by-id", get(handlers::search_by_id))
        .route("/list", get(handlers::list))
        .route("/health", get(handlers::health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use doclookup_mongodb::{Document, DocumentStore, MemoryStore, MongoError, MongoResult, doc};
    use doclookup_query::LookupSettings;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::service::LookupService;

    /// Wraps a store and records every filter it receives.
    struct RecordingStore {
        inner: MemoryStore,
        filters: Mutex<Vec<Document>>,
    }

    #[async_trait]
    impl DocumentStore for RecordingStore {
        async fn find_one(&self, filter: Document) -> MongoResult<Option<Document>> {
            self.filters.lock().unwrap().push(filter.clone());
            self.inner.find_one(filter).await
        }

        async fn find_page(&self, sort: &str, skip: u64, limit: u64) -> MongoResult<Vec<Document>> {
            self.inner.find_page(sort, skip, limit).await
        }

        async fn count(&self) -> MongoResult<u64> {
            self.inner.count().await
        }

        async fn ping(&self) -> MongoResult<()> {
            Err(MongoError::connection("down"))
        }
    }

    fn setup(settings: LookupSettings) -> (Router, Arc<RecordingStore>) {
        let store = Arc::new(RecordingStore {
            inner: MemoryStore::with_documents((1..=30).map(|n| {
                doc! { "code": format!("C{:02}", n), "email": format!("user{}@example.com", n), "active": n % 2 == 0 }
            })),
            filters: Mutex::new(Vec::new()),
        });
        let service = LookupService::new(Arc::new(settings), store.clone());
        (create_router(AppState::new(service)), store)
    }

    async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(router, uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    fn code_settings() -> LookupSettings {
        LookupSettings::default()
            .with_primary_id_field("code")
            .with_allowed_fields(["email", "code"])
    }

    #[tokio::test]
    async fn test_meta() {
        let (router, _) = setup(code_settings());
        let (status, body) = get_json(&router, "/meta").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "primaryIdField": "code", "allowedFields": ["email", "code"] })
        );
    }

    #[tokio::test]
    async fn test_meta_with_empty_allow_list() {
        let (router, _) = setup(LookupSettings::default());
        let (_, body) = get_json(&router, "/meta").await;
        assert_eq!(body, json!({ "primaryIdField": "_id", "allowedFields": [] }));
    }

    #[tokio::test]
    async fn test_by_field_found() {
        let (router, _) = setup(code_settings());
        let (status, body) =
            get_json(&router, "/search/by-field?field=email&value=user7%40example.com").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "C07");
    }

    #[tokio::test]
    async fn test_disallowed_field_never_reaches_store() {
        let (router, store) = setup(code_settings());
        let (status, body) = get_json(&router, "/search/by-field?field=active&value=true").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Field not allowed. Use one of: email, code" }));
        assert!(store.filters.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_by_field_missing_params() {
        let (router, store) = setup(code_settings());

        for uri in ["/search/by-field", "/search/by-field?field=email", "/search/by-field?field=email&value="] {
            let (status, body) = get_json(&router, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, json!({ "error": "Provide 'field' and 'value'" }));
        }
        assert!(store.filters.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_by_id_uses_primary_field() {
        let (router, store) = setup(code_settings());
        let (status, body) = get_json(&router, "/search/by-id?id=C12").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "user12@example.com");
        assert_eq!(store.filters.lock().unwrap()[0], doc! { "code": "C12" });
    }

    #[tokio::test]
    async fn test_by_id_missing_and_not_found() {
        let (router, _) = setup(code_settings());

        let (status, body) = get_json(&router, "/search/by-id").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing 'id'" }));

        let (status, body) = get_json(&router, "/search/by-id?id=C99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Not found" }));
    }

    #[tokio::test]
    async fn test_list_contract() {
        let (router, _) = setup(code_settings());

        let (status, body) = get_json(&router, "/list?page=3&pageSize=10&includeTotal=true").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 30);
        assert_eq!(body["page"], 3);
        assert_eq!(body["pageSize"], 10);
        assert_eq!(body["items"].as_array().unwrap().len(), 10);
        assert_eq!(body["items"][0]["code"], "C21");

        let (_, body) = get_json(&router, "/list?page=0&pageSize=abc").await;
        assert_eq!(body["page"], 1);
        assert_eq!(body["pageSize"], 25);
        assert_eq!(body["total"], Value::Null);
    }

    #[tokio::test]
    async fn test_health_unavailable() {
        let (router, _) = setup(code_settings());
        let (status, body) = get_json(&router, "/health").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({ "status": "unavailable" }));
    }

    #[tokio::test]
    async fn test_table_page_last_page() {
        let (router, _) = setup(code_settings());
        let (status, html) = get(&router, "/?page=2&pageSize=25").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<th>code</th><th>email</th><th>active</th>"));
        assert!(html.contains("Página 2 \u{2022} 26\u{2013}30 de 30"));
        assert!(html.contains(r#"<button type="button" disabled>Siguiente</button>"#));
    }

    #[tokio::test]
    async fn test_table_page_search_not_found() {
        let (router, _) = setup(code_settings());
        let (_, html) = get(&router, "/?id=C99").await;

        assert!(html.contains("<th>Sin datos</th>"));
        assert!(html.contains("Error al buscar"));
        assert!(html.contains(r#"<button type="button" disabled>Anterior</button>"#));
    }

    #[tokio::test]
    async fn test_repeated_keys_use_first_value() {
        let (router, store) = setup(code_settings());

        let (status, body) = get_json(&router, "/search/by-id?id=C01&id=C02").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "C01");

        let (status, body) =
            get_json(&router, "/search/by-field?field=email&value=user3@example.com&field=code").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["code"], "C03");

        let filters = store.filters.lock().unwrap();
        assert_eq!(filters.len(), 2);
        assert_eq!(filters[1], doc! { "email": "user3@example.com" });
    }

    #[tokio::test]
    async fn test_repeated_missing_key_is_json_error() {
        let (router, _) = setup(code_settings());
        let (status, body) = get_json(&router, "/search/by-id?id=&id=C02").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing 'id'" }));
    }

    #[tokio::test]
    async fn test_table_page_huge_page_number() {
        let (router, _) = setup(code_settings());
        let (status, html) = get(&router, "/?page=18446744073709551615").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Página 18446744073709551615 \u{2022} 0 filas"));
        assert!(html.contains(r#"<button type="button" disabled>Siguiente</button>"#));
    }
}

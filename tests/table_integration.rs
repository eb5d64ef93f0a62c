//! Integration tests for the table against a running server.
//!
//! The router is served on an ephemeral port and the table controller
//! fetches from it through the HTTP source.

use std::net::SocketAddr;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use doclookup::mongodb::{MemoryStore, doc};
use doclookup::query::LookupSettings;
use doclookup::server::{AppState, LookupServer, LookupService, ServerConfig};
use doclookup::table::{Endpoints, HttpSource, Labels, Mode, TableController};

struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    async fn start(rows: u32) -> Self {
        let store = MemoryStore::with_documents((1..=rows).map(|n| {
            doc! { "code": format!("C{:03}", n), "name": format!("Student {}", n), "enrolled": n % 3 != 0 }
        }));
        let settings = LookupSettings::default().with_primary_id_field("code");
        let service = LookupService::new(Arc::new(settings), Arc::new(store));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let server = LookupServer::new(ServerConfig::default(), AppState::new(service));
        tokio::spawn(async move {
            server
                .serve(listener, async {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            addr,
            shutdown: Some(tx),
        }
    }

    fn table(&self) -> TableController<HttpSource> {
        let endpoints = Endpoints::for_base(&format!("http://{}", self.addr)).unwrap();
        TableController::new(HttpSource::new(endpoints), 25)
            .with_labels(Labels::english())
            .with_identity_field("code")
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

#[tokio::test]
async fn test_pages_through_collection() {
    let server = TestServer::start(57).await;
    let mut table = server.table();

    let view = table.load_list_page().await;
    assert_eq!(view.columns, vec!["code", "name", "enrolled"]);
    assert_eq!(view.rows[0], vec!["C001", "Student 1", "true"]);
    assert_eq!(view.page_info, "Page 1 \u{2022} 1\u{2013}25 of 57");
    assert!(view.prev_disabled);
    assert!(!view.next_disabled);

    table.next_page().await;
    let view = table.next_page().await;
    assert_eq!(view.rows.len(), 7);
    assert_eq!(view.page_info, "Page 3 \u{2022} 51\u{2013}57 of 57");
    assert!(view.next_disabled);

    let view = table.prev_page().await;
    assert_eq!(view.page_info, "Page 2 \u{2022} 26\u{2013}50 of 57");
}

#[tokio::test]
async fn test_search_and_clear() {
    let server = TestServer::start(10).await;
    let mut table = server.table();

    let view = table.submit_search("C003").await;
    assert_eq!(view.rows, vec![vec!["C003", "Student 3", "false"]]);
    assert_eq!(view.page_info, "Search by ID: \u{201c}C003\u{201d} \u{2022} 1 row(s)");
    assert!(view.prev_disabled && view.next_disabled);
    assert_eq!(table.state().mode, Mode::Search);

    let view = table.submit_search("C999").await;
    assert_eq!(view.columns, vec!["No data"]);
    assert_eq!(view.status, "Search failed");
    assert!(!table.state().loading);

    let view = table.clear().await;
    assert_eq!(view.page_info, "Page 1 \u{2022} 1\u{2013}10 of 10");
    assert_eq!(table.state().mode, Mode::List);
}

#[tokio::test]
async fn test_unreachable_server_shows_error_row() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let endpoints = Endpoints::for_base(&format!("http://{addr}")).unwrap();
    let mut table = TableController::new(HttpSource::new(endpoints), 25);

    let view = table.load_list_page().await;
    assert_eq!(view.columns, vec!["Error"]);
    assert!(view.page_info.is_empty());
    assert_eq!(view.status, "Error al cargar");
    assert!(!table.state().loading);
}

#[tokio::test]
async fn test_table_page_over_http() {
    let server = TestServer::start(3).await;
    let url = format!("http://{}/?id=C002", server.addr);

    let html = reqwest::get(url).await.unwrap().text().await.unwrap();
    assert!(html.contains("<td>Student 2</td>"));
    assert!(html.contains("Búsqueda por ID"));
}

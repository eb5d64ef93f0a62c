//! # doclookup-table
//!
//! The paginated table that browses a lookup server.
//!
//! The table lists pages of the collection or shows the result of a single
//! identifier search. This crate provides:
//! - The pagination state machine ([`TableState`])
//! - Cell formatting for extended-JSON values ([`format_value`])
//! - Rendering to a [`TableView`] with dynamic columns
//! - A [`TableController`] that fetches from a [`LookupSource`] such as
//!   [`HttpSource`]
//! - A server-rendered HTML page ([`page::render_page`])
//!
//! ## Example
//!
//! ```rust,ignore
//! use doclookup_table::{Endpoints, HttpSource, Labels, TableController};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpSource::new(Endpoints::for_base("http://localhost:8080")?);
//!     let mut table = TableController::new(source, 25).with_labels(Labels::english());
//!
//!     let view = table.load_list_page().await;
//!     println!("{}", view.page_info);
//!
//!     Ok(())
//! }
//! ```

pub mod controller;
pub mod format;
pub mod labels;
pub mod page;
pub mod payload;
pub mod render;
pub mod source;
pub mod state;

pub use controller::TableController;
pub use format::{format_date, format_value};
pub use labels::Labels;
pub use page::{PageQuery, escape_html, render_page};
pub use payload::{ListPage, SearchPayload};
pub use render::{TableView, build_columns, render_table};
pub use source::{Endpoints, FetchError, FetchResult, HttpSource, LookupSource};
pub use state::{Fetch, LoadingGuard, Mode, TableState};

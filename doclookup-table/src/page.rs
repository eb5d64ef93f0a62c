//! Server-rendered table page.
//!
//! A [`PageQuery`] carries the request parameters of the page (`id`, `page`,
//! `pageSize`, `clear`). [`drive`] maps them onto controller transitions and
//! [`render_page`] turns the resulting view into a complete HTML document
//! whose pager buttons are plain links.

use std::fmt::Write as _;

use doclookup_query::pagination::MAX_PAGE_SIZE;
use serde::Deserialize;

use crate::controller::TableController;
use crate::labels::Labels;
use crate::render::TableView;
use crate::source::LookupSource;
use crate::state::{Mode, TableState};

/// Page sizes offered by the selector.
pub const PAGE_SIZE_CHOICES: [u64; 4] = [10, 25, 50, 100];

/// Request parameters of the table page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// Identifier to search for.
    pub id: Option<String>,
    /// 1-based list page.
    pub page: Option<String>,
    /// Rows per page.
    pub page_size: Option<String>,
    /// Present to leave search mode.
    pub clear: Option<String>,
}

impl PageQuery {
    /// Requested page, at least 1.
    pub fn page(&self) -> u64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u64>().ok())
            .unwrap_or(1)
            .max(1)
    }

    /// Requested page size, falling back to `default` and capped.
    pub fn page_size(&self, default: u64) -> u64 {
        self.page_size
            .as_deref()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|s| *s > 0)
            .unwrap_or(default)
            .min(MAX_PAGE_SIZE)
    }

    /// Whether the clear action was requested.
    pub fn is_clear(&self) -> bool {
        self.clear.is_some()
    }

    /// The trimmed identifier, when non-blank.
    pub fn search_id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }
}

/// Apply the request to a fresh controller and fetch what it asks for.
///
/// A missing page size keeps the controller's configured one.
pub async fn drive<S: LookupSource>(table: &mut TableController<S>, query: &PageQuery) {
    let page_size = query.page_size(table.state().page_size);

    if query.is_clear() {
        table.state_mut().page_size = page_size;
        table.clear().await;
        return;
    }

    if let Some(id) = query.search_id() {
        table.state_mut().page_size = page_size;
        table.submit_search(id).await;
        return;
    }

    let state = table.state_mut();
    state.page_size = page_size;
    state.page = query.page();
    table.load_list_page().await;
}

/// Escape text for HTML content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn list_href(page: u64, page_size: u64) -> String {
    format!("?page={page}&pageSize={page_size}")
}

fn pager_button(out: &mut String, label: &str, href: String, disabled: bool) {
    if disabled {
        let _ = write!(out, r#"<button type="button" disabled>{}</button>"#, escape_html(label));
    } else {
        let _ = write!(
            out,
            r#"<a class="button" href="{}">{}</a>"#,
            escape_html(&href),
            escape_html(label)
        );
    }
}

fn render_grid(out: &mut String, view: &TableView) {
    out.push_str("<table>\n<thead><tr>");
    for column in &view.columns {
        let _ = write!(out, "<th>{}</th>", escape_html(column));
    }
    out.push_str("</tr></thead>\n<tbody>\n");
    for row in &view.rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape_html(cell));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody>\n</table>\n");
}

/// Render the full HTML document for a view.
pub fn render_page(view: &TableView, state: &TableState, labels: &Labels) -> String {
    let mut out = String::with_capacity(4096);
    let title = escape_html(labels.title);

    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>table{{border-collapse:collapse}}th,td{{border:1px solid #ccc;padding:4px 8px}}\
         .button{{padding:2px 8px}}</style>\n</head>\n<body>\n<h1>{title}</h1>\n"
    );

    let id_value = if state.mode == Mode::Search {
        escape_html(&state.last_id)
    } else {
        String::new()
    };
    let _ = write!(
        out,
        "<form method=\"get\" action=\"\">\n\
         <input type=\"text\" name=\"id\" value=\"{id_value}\" placeholder=\"{}\">\n\
         <input type=\"hidden\" name=\"pageSize\" value=\"{}\">\n\
         <button type=\"submit\">{}</button>\n\
         <a class=\"button\" href=\"?clear=1&amp;pageSize={}\">{}</a>\n</form>\n",
        escape_html(labels.id_placeholder),
        state.page_size,
        escape_html(labels.search),
        state.page_size,
        escape_html(labels.clear),
    );

    let _ = write!(
        out,
        "<form method=\"get\" action=\"\">\n<label>{} <select name=\"pageSize\">",
        escape_html(labels.page_size)
    );
    for choice in PAGE_SIZE_CHOICES {
        let selected = if choice == state.page_size { " selected" } else { "" };
        let _ = write!(out, "<option value=\"{choice}\"{selected}>{choice}</option>");
    }
    out.push_str("</select></label>\n<button type=\"submit\">OK</button>\n</form>\n");

    render_grid(&mut out, view);

    out.push_str("<nav>\n");
    pager_button(
        &mut out,
        labels.previous,
        list_href(state.page.saturating_sub(1).max(1), state.page_size),
        view.prev_disabled,
    );
    pager_button(
        &mut out,
        labels.next,
        list_href(state.page.saturating_add(1), state.page_size),
        view.next_disabled,
    );
    let reload_href = match state.mode {
        Mode::Search => format!("?id={}&pageSize={}", encode_component(&state.last_id), state.page_size),
        Mode::List => list_href(state.page, state.page_size),
    };
    pager_button(&mut out, labels.reload, reload_href, false);
    out.push_str("\n</nav>\n");

    let _ = write!(
        out,
        "<p id=\"page-info\">{}</p>\n<p id=\"status\">{}</p>\n</body>\n</html>\n",
        escape_html(&view.page_info),
        escape_html(&view.status)
    );
    out
}

fn encode_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

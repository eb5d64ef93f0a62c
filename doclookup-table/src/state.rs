//! Client pagination state.
//!
//! The table is either listing pages of the collection or showing the result
//! of a single identifier search. Search results are never paginated.
//!
//! ```rust
//! use doclookup_table::{Mode, TableState};
//!
//! let mut state = TableState::new(25);
//! state.total = Some(57);
//! state.page = 3;
//! assert!(state.next_disabled());
//!
//! assert!(state.submit_search("  64b7f0c2a1b2c3d4e5f60718 "));
//! assert_eq!(state.mode, Mode::Search);
//! assert!(state.prev_disabled() && state.next_disabled());
//! ```

use std::ops::{Deref, DerefMut};

use doclookup_query::pagination::{DEFAULT_PAGE_SIZE, has_more};

/// What the table is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Paginated listing.
    #[default]
    List,
    /// Result of an identifier search.
    Search,
}

/// The fetch a state transition calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    /// Load the current list page.
    ListPage,
    /// Search for the given identifier.
    ById(String),
    /// Nothing to fetch.
    Nothing,
}

/// Pagination state of the table page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// Current mode.
    pub mode: Mode,
    /// 1-based page number.
    pub page: u64,
    /// Rows per page.
    pub page_size: u64,
    /// Total rows, known after a list fetch.
    pub total: Option<u64>,
    /// Last searched identifier.
    pub last_id: String,
    /// Whether a fetch is in flight.
    pub loading: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    /// Initial state: listing the first page.
    pub fn new(page_size: u64) -> Self {
        Self {
            mode: Mode::List,
            page: 1,
            page_size: page_size.max(1),
            total: None,
            last_id: String::new(),
            loading: false,
        }
    }

    /// Whether the table shows a search result.
    pub fn is_search(&self) -> bool {
        self.mode == Mode::Search
    }

    /// Whether the "previous" button is disabled.
    pub fn prev_disabled(&self) -> bool {
        self.is_search() || self.loading || self.page <= 1
    }

    /// Whether the "next" button is disabled.
    pub fn next_disabled(&self) -> bool {
        self.is_search()
            || self.loading
            || self
                .total
                .is_some_and(|total| !has_more(self.page, self.page_size, total))
    }

    /// Switch to search mode for a non-blank identifier.
    ///
    /// Returns `false` (leaving the state untouched) when `raw` is blank.
    pub fn submit_search(&mut self, raw: &str) -> bool {
        let id = raw.trim();
        if id.is_empty() {
            return false;
        }

        self.mode = Mode::Search;
        self.last_id = id.to_string();
        true
    }

    /// Return to the first list page.
    pub fn clear(&mut self) {
        self.mode = Mode::List;
        self.last_id.clear();
        self.page = 1;
    }

    /// Change the page size, returning to the first list page.
    pub fn set_page_size(&mut self, page_size: u64) {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self.page = 1;
        self.mode = Mode::List;
    }

    /// Advance to the next list page. Returns whether the page changed.
    pub fn next_page(&mut self) -> bool {
        if self.mode != Mode::List {
            return false;
        }
        self.page = self.page.saturating_add(1);
        true
    }

    /// Go back one list page. Returns whether the page changed.
    pub fn prev_page(&mut self) -> bool {
        if self.mode != Mode::List || self.page <= 1 {
            return false;
        }
        self.page -= 1;
        true
    }

    /// The fetch that reloads what the table currently shows.
    pub fn reload(&self) -> Fetch {
        match self.mode {
            Mode::List => Fetch::ListPage,
            Mode::Search if !self.last_id.is_empty() => Fetch::ById(self.last_id.clone()),
            Mode::Search => Fetch::Nothing,
        }
    }
}

/// Holds the loading flag for the duration of a fetch.
///
/// The flag is set on acquisition and cleared when the guard is dropped,
/// whichever way the fetch ends.
#[derive(Debug)]
pub struct LoadingGuard<'a> {
    state: &'a mut TableState,
}

impl<'a> LoadingGuard<'a> {
    /// Mark the state as loading.
    pub fn acquire(state: &'a mut TableState) -> Self {
        state.loading = true;
        Self { state }
    }
}

impl Deref for LoadingGuard<'_> {
    type Target = TableState;

    fn deref(&self) -> &TableState {
        self.state
    }
}

impl DerefMut for LoadingGuard<'_> {
    fn deref_mut(&mut self) -> &mut TableState {
        self.state
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.loading = false;
    }
}

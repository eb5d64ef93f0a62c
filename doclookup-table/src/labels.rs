//! User-facing strings of the table page.

/// Texts shown by the table renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Page title.
    pub title: &'static str,
    /// Header shown when there are no rows.
    pub no_data: &'static str,
    /// Header of the error row.
    pub error: &'static str,
    /// Status while a fetch is in flight.
    pub loading: &'static str,
    /// Status after a fetch completed.
    pub ready: &'static str,
    /// Status after a list fetch failed.
    pub load_failed: &'static str,
    /// Status after a search failed.
    pub search_failed: &'static str,
    /// Word for "page".
    pub page: &'static str,
    /// Word joining a range and its total.
    pub of: &'static str,
    /// Plural for rows.
    pub rows: &'static str,
    /// Row count suffix for search results.
    pub rows_maybe_plural: &'static str,
    /// Prefix of the search status line.
    pub search_by_id: &'static str,
    /// Previous page button.
    pub previous: &'static str,
    /// Next page button.
    pub next: &'static str,
    /// Reload button.
    pub reload: &'static str,
    /// Search button.
    pub search: &'static str,
    /// Clear button.
    pub clear: &'static str,
    /// Page size selector.
    pub page_size: &'static str,
    /// Placeholder of the identifier input.
    pub id_placeholder: &'static str,
}

impl Labels {
    /// The original Spanish texts.
    pub fn spanish() -> Self {
        Self {
            title: "Consulta de documentos",
            no_data: "Sin datos",
            error: "Error",
            loading: "Cargando...",
            ready: "Listo",
            load_failed: "Error al cargar",
            search_failed: "Error al buscar",
            page: "Página",
            of: "de",
            rows: "filas",
            rows_maybe_plural: "fila(s)",
            search_by_id: "Búsqueda por ID",
            previous: "Anterior",
            next: "Siguiente",
            reload: "Recargar",
            search: "Buscar",
            clear: "Limpiar",
            page_size: "Filas por página",
            id_placeholder: "ID del documento",
        }
    }

    /// English texts.
    pub fn english() -> Self {
        Self {
            title: "Document lookup",
            no_data: "No data",
            error: "Error",
            loading: "Loading...",
            ready: "Ready",
            load_failed: "Failed to load",
            search_failed: "Search failed",
            page: "Page",
            of: "of",
            rows: "rows",
            rows_maybe_plural: "row(s)",
            search_by_id: "Search by ID",
            previous: "Previous",
            next: "Next",
            reload: "Reload",
            search: "Search",
            clear: "Clear",
            page_size: "Rows per page",
            id_placeholder: "Document ID",
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::spanish()
    }
}

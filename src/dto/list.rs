//! DTOs for list pages and exports.

use serde::Serialize;

use crate::pagination::Paginated;

/// Query parameters accepted by the list page service.
#[derive(Debug, Default, Clone)]
pub struct ListQuery {
    /// Search string typed by the user; kept verbatim.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }
}

/// Data required to render one page of a reference table.
#[derive(Debug, Serialize)]
pub struct ListPageData<T> {
    /// Table heading, e.g. "Region".
    pub title: String,
    /// Column headers in display order.
    pub headers: Vec<&'static str>,
    /// Current page of records.
    pub records: Paginated<T>,
    /// Search query echoed back when present.
    pub search_query: Option<String>,
}

/// Rows handed to an export renderer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportData {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
